//! Build errors for rule table and descriptor builders.

use thiserror::Error;

/// Errors that can occur when building rule tables.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Descriptor state not specified. Call .state(state) or use DescriptorBuilder::for_state")]
    MissingState,

    #[error("Next states for '{state}' not specified. Call .to(state), .any() or .terminal()")]
    MissingNextStates { state: String },

    #[error("State '{state}' is described more than once")]
    DuplicateState { state: String },

    #[error("No states defined. Add at least one state")]
    EmptyTable,
}

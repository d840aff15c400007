//! Core state types.
//!
//! This module contains the vocabulary shared by every other layer:
//! - State identifiers via the `State` trait
//! - Immutable history of committed transitions

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;

//! Builder API for ergonomic rule table construction.
//!
//! This module provides fluent builders and macros for declaring rule
//! tables and state types with minimal boilerplate.

pub mod descriptor;
pub mod error;
pub mod macros;
pub mod table;

pub use descriptor::DescriptorBuilder;
pub use error::BuildError;
pub use table::RuleTableBuilder;

use crate::core::State;
use crate::rules::{RuleTable, TransitionDescriptor};

/// Create a table in which every state may move to any state.
///
/// # Example
///
/// ```
/// use statute::builder::fully_connected;
/// use statute::engine::next_states;
///
/// let board = fully_connected(["todo", "doing", "done"].map(String::from));
/// let next = next_states(&"done".to_string(), &board).unwrap();
/// assert_eq!(next, ["todo", "doing", "done"]);
/// ```
pub fn fully_connected<S, I>(states: I) -> RuleTable<S>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    states
        .into_iter()
        .map(|state| (state, TransitionDescriptor::any()))
        .collect()
}

/// Create a table where each state may only advance to the one after it.
///
/// The last state is terminal.
///
/// # Example
///
/// ```
/// use statute::builder::linear;
/// use statute::engine::next_states;
///
/// let pipeline = linear(["draft", "review", "published"].map(String::from));
/// assert_eq!(next_states(&"draft".to_string(), &pipeline).unwrap(), ["review"]);
/// assert!(next_states(&"published".to_string(), &pipeline).unwrap().is_empty());
/// ```
pub fn linear<S, I>(states: I) -> RuleTable<S>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    let states: Vec<S> = states.into_iter().collect();
    let successors = states.iter().skip(1).cloned().map(Some).chain([None]);
    states
        .iter()
        .cloned()
        .zip(successors)
        .map(|(state, next)| (state, TransitionDescriptor::to(next)))
        .collect()
}

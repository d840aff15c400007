//! Transition engine.
//!
//! Pure lookup-driven logic over a [`RuleTable`](crate::rules::RuleTable):
//! decide legality, resolve the wildcard, and run arrival callbacks.
//!
//! # Key Concepts
//!
//! - **Resolution**: `next_states` answers "where can I go from here?"
//! - **Transition**: validate, then run the destination's callbacks in order
//! - **No rollback**: a failing callback is reported after the state change
//!   has already taken effect
//!
//! Everything runs synchronously on the caller's thread. Callers sharing a
//! table across threads serialize access themselves.

mod error;
mod transition;

pub use error::TransitionError;
pub use transition::{is_legal, next_states, register_callback, resolve_next_states, transition};

pub(crate) use transition::run_arrival_callbacks;

//! Rule table data model.
//!
//! A [`RuleTable`] maps each state to a [`TransitionDescriptor`]: the legal
//! destinations out of that state, plus the [`Callback`]s to run whenever a
//! transition lands on it. The table is plain data owned by the caller (or
//! by a [`StateMachine`](crate::machine::StateMachine)); the engine only
//! reads it, except for callback registration.

mod callback;
mod table;

pub use callback::{Callback, CallbackError};
pub use table::{NextStates, RuleTable, TransitionDescriptor};

//! Transition errors.

use crate::core::State;
use crate::rules::CallbackError;
use thiserror::Error;

/// Errors that can occur when querying or performing transitions.
#[derive(Debug, Error)]
pub enum TransitionError<S: State> {
    /// The state is not a key in the rule table.
    #[error("Unknown state '{}'", .state.name())]
    UnknownState { state: S },

    /// The destination is not among the legal next states. Nothing changed.
    #[error("Invalid transition from '{}' to '{}'", .from.name(), .to.name())]
    IllegalTransition { from: S, to: S },

    /// An arrival callback failed after the transition to `to` was committed.
    #[error("Callback failed on arrival at '{}' from '{}': {source}", .to.name(), .from.name())]
    CallbackFailed {
        from: S,
        to: S,
        #[source]
        source: CallbackError,
    },
}

impl<S: State> TransitionError<S> {
    /// True when the state change took effect despite the error.
    ///
    /// Only callback failures are committed; the other variants leave
    /// the current state untouched.
    pub fn is_committed(&self) -> bool {
        matches!(self, TransitionError::CallbackFailed { .. })
    }

    /// The callback's own error, if a callback failed.
    pub fn callback_error(&self) -> Option<&CallbackError> {
        match self {
            TransitionError::CallbackFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Consume the error, returning the callback's own error if a callback failed.
    pub fn into_callback_error(self) -> Option<CallbackError> {
        match self {
            TransitionError::CallbackFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

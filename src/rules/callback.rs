//! Arrival callbacks.

use crate::core::State;
use std::fmt;
use std::sync::Arc;

/// Error type returned by a failing callback.
///
/// The engine hands it back to the caller untouched inside
/// [`TransitionError::CallbackFailed`](crate::engine::TransitionError::CallbackFailed),
/// so embedders can downcast to their own error type.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

type Handler<S> = dyn Fn(&S) -> Result<(), CallbackError> + Send + Sync;

/// Embedder-supplied code run on arrival at a state.
///
/// The handler receives the state the machine was in *before* the
/// transition. Cloning a callback shares the same handler.
///
/// # Example
///
/// ```rust
/// use statute::rules::Callback;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let callback = Callback::infallible(move |prev: &String| {
///     sink.lock().unwrap().push(prev.clone());
/// });
///
/// callback.call(&"just right".to_string()).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec!["just right".to_string()]);
/// ```
pub struct Callback<S: State> {
    handler: Arc<Handler<S>>,
}

impl<S: State> Callback<S> {
    /// Create a callback from a fallible handler.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&S) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        Callback {
            handler: Arc::new(handler),
        }
    }

    /// Create a callback from a handler that cannot fail.
    pub fn infallible<F>(handler: F) -> Self
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        Self::new(move |previous| {
            handler(previous);
            Ok(())
        })
    }

    /// Invoke the handler with the previous state.
    pub fn call(&self, previous: &S) -> Result<(), CallbackError> {
        (self.handler)(previous)
    }

    /// True when both handles point at the same handler.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<S: State> Clone for Callback<S> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S: State> fmt::Debug for Callback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

//! Builder for a single state's transition descriptor.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::rules::{Callback, CallbackError, NextStates, TransitionDescriptor};

/// Builder for one row of a rule table.
///
/// Destinations must be stated explicitly: `.to(..)` for a list, `.any()`
/// for the wildcard, or `.terminal()` for a state with no way out.
/// Once `.any()` has been called, later `.to(..)` calls are ignored since
/// the wildcard already covers every state.
pub struct DescriptorBuilder<S: State> {
    state: Option<S>,
    next: Option<NextStates<S>>,
    callbacks: Vec<Callback<S>>,
}

impl<S: State> DescriptorBuilder<S> {
    /// Create a new descriptor builder.
    pub fn new() -> Self {
        Self {
            state: None,
            next: None,
            callbacks: Vec::new(),
        }
    }

    /// Create a builder for `state`.
    pub fn for_state(state: S) -> Self {
        Self::new().state(state)
    }

    /// Set the state being described (required).
    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Allow a transition to `state`.
    pub fn to(mut self, state: S) -> Self {
        match &mut self.next {
            Some(NextStates::Any) => {}
            Some(NextStates::Explicit(states)) => states.push(state),
            None => self.next = Some(NextStates::Explicit(vec![state])),
        }
        self
    }

    /// Allow transitions to every state in `states`, in order.
    pub fn to_all<I>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        states.into_iter().fold(self, |builder, state| builder.to(state))
    }

    /// Allow a transition to any state in the table.
    pub fn any(mut self) -> Self {
        self.next = Some(NextStates::Any);
        self
    }

    /// Declare that no transition leaves this state.
    pub fn terminal(mut self) -> Self {
        self.next = Some(NextStates::none());
        self
    }

    /// Add an arrival callback (optional, repeatable).
    pub fn on_enter(mut self, callback: Callback<S>) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Add a fallible closure as an arrival callback.
    pub fn on_enter_fn<F>(self, handler: F) -> Self
    where
        F: Fn(&S) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.on_enter(Callback::new(handler))
    }

    /// Build the descriptor, paired with the state it describes.
    pub fn build(self) -> Result<(S, TransitionDescriptor<S>), BuildError> {
        let state = self.state.ok_or(BuildError::MissingState)?;
        let next = self.next.ok_or_else(|| BuildError::MissingNextStates {
            state: state.name().to_string(),
        })?;

        Ok((
            state,
            TransitionDescriptor {
                next,
                callbacks: self.callbacks,
            },
        ))
    }
}

impl<S: State> Default for DescriptorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

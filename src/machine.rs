//! Stateful wrapper holding a current state next to its rule table.

use crate::core::{State, StateHistory, StateTransition};
use crate::engine::{self, TransitionError};
use crate::rules::{Callback, CallbackError, RuleTable};
use chrono::Utc;
use tracing::debug;

/// A current state plus the rule table that governs it.
///
/// The current state only changes through an accepted transition. Arrival
/// callbacks run after the change is committed, so a callback failure is
/// reported with the machine already in the new state.
///
/// # Example
///
/// ```rust
/// use statute::machine::StateMachine;
/// use statute::rules::{RuleTable, TransitionDescriptor};
///
/// let s = |name: &str| name.to_string();
/// let table: RuleTable<String> = [
///     (s("too hot"), TransitionDescriptor::to([s("just right")])),
///     (s("too cold"), TransitionDescriptor::to([s("just right")])),
///     (s("just right"), TransitionDescriptor::to([s("too hot"), s("too cold")])),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut room = StateMachine::new(s("just right"), table).unwrap();
/// room.transition(s("too hot"))?
///     .transition(s("just right"))?
///     .transition(s("too cold"))?;
///
/// assert_eq!(room.current_state(), "too cold");
/// assert_eq!(room.history().len(), 3);
/// # Ok::<(), statute::engine::TransitionError<String>>(())
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State> {
    current: S,
    table: RuleTable<S>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial`, which must be a key in `table`.
    pub fn new(initial: S, table: RuleTable<S>) -> Result<Self, TransitionError<S>> {
        if !table.contains(&initial) {
            return Err(TransitionError::UnknownState { state: initial });
        }
        Ok(Self {
            current: initial,
            table,
            history: StateHistory::new(),
        })
    }

    /// Move to `to`, returning the machine for chaining.
    ///
    /// On [`TransitionError::IllegalTransition`] or
    /// [`TransitionError::UnknownState`] nothing changes. On
    /// [`TransitionError::CallbackFailed`] the machine is already in `to`.
    pub fn transition(&mut self, to: S) -> Result<&mut Self, TransitionError<S>> {
        if !engine::is_legal(&self.current, &to, &self.table)? {
            debug!(
                from = self.current.name(),
                to = to.name(),
                "transition rejected"
            );
            return Err(TransitionError::IllegalTransition {
                from: self.current.clone(),
                to,
            });
        }

        let from = std::mem::replace(&mut self.current, to);
        debug!(
            from = from.name(),
            to = self.current.name(),
            "transition committed"
        );

        let outcome = engine::run_arrival_callbacks(&from, &self.current, &self.table);
        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
            callbacks_completed: outcome.is_ok(),
        });

        outcome.map(|()| self)
    }

    /// Legal destinations out of the current state.
    pub fn next_states(&self) -> Result<Vec<S>, TransitionError<S>> {
        engine::next_states(&self.current, &self.table)
    }

    /// Whether a transition to `to` would be accepted right now.
    pub fn can_transition(&self, to: &S) -> bool {
        engine::is_legal(&self.current, to, &self.table).unwrap_or(false)
    }

    /// Register an arrival callback on `target`.
    ///
    /// See [`engine::register_callback`]; returns the machine for chaining.
    pub fn register_callback(&mut self, target: S, callback: Callback<S>) -> &mut Self {
        engine::register_callback(target, callback, &mut self.table);
        self
    }

    /// Register a fallible closure as an arrival callback on `target`.
    pub fn on_enter<F>(&mut self, target: S, handler: F) -> &mut Self
    where
        F: Fn(&S) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.register_callback(target, Callback::new(handler))
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn table(&self) -> &RuleTable<S> {
        &self.table
    }

    /// Accepted transitions, including those whose callbacks failed.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Take the machine apart into current state, table and history.
    pub fn into_parts(self) -> (S, RuleTable<S>, StateHistory<S>) {
        (self.current, self.table, self.history)
    }
}

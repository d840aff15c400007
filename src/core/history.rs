//! State transition history tracking.
//!
//! Every accepted transition is recorded, including those whose arrival
//! callbacks failed: the state change is committed either way, and the
//! record says whether the callbacks all completed.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use statute::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "just right".to_string(),
///     to: "too hot".to_string(),
///     timestamp: Utc::now(),
///     callbacks_completed: true,
/// };
/// assert_eq!(transition.to, "too hot");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
    /// False when an arrival callback failed after the state was committed
    pub callbacks_completed: bool,
}

/// Ordered history of accepted transitions.
///
/// `record` consumes the history and returns it with the transition
/// appended, so a history value never changes behind a shared reference.
///
/// # Example
///
/// ```rust
/// use statute::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: "todo".to_string(),
///         to: "doing".to_string(),
///         timestamp: Utc::now(),
///         callbacks_completed: true,
///     })
///     .record(StateTransition {
///         from: "doing".to_string(),
///         to: "done".to_string(),
///         timestamp: Utc::now(),
///         callbacks_completed: true,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // todo -> doing -> done
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first source state followed by every destination, in
    /// order. An empty history has an empty path.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in the order they were committed.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str) -> StateTransition<String> {
        StateTransition {
            from: from.to_string(),
            to: to.to_string(),
            timestamp: Utc::now(),
            callbacks_completed: true,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<String> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let history = StateHistory::new().record(step("just right", "too hot"));

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().to, "too hot");
    }

    #[test]
    fn record_leaves_clones_untouched() {
        let history = StateHistory::new().record(step("todo", "doing"));
        let snapshot = history.clone();

        let extended = history.record(step("doing", "done"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step("just right", "too hot"))
            .record(step("too hot", "just right"))
            .record(step("just right", "too cold"));

        let path = history.get_path();
        assert_eq!(path, vec!["just right", "too hot", "just right", "too cold"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(step("todo", "doing"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(step("doing", "done"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(step("todo", "doing"));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn failed_callbacks_are_recorded() {
        let mut transition = step("just right", "too hot");
        transition.callbacks_completed = false;

        let history = StateHistory::new().record(transition);

        assert!(!history.transitions()[0].callbacks_completed);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(step("todo", "done"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}

//! Stateless transition operations.
//!
//! Every function takes the current state and the rule table explicitly.
//! None of them keep state between calls; `transition` returns the new
//! state and leaves committing it to the caller.

use super::error::TransitionError;
use crate::core::State;
use crate::rules::{Callback, NextStates, RuleTable, TransitionDescriptor};
use tracing::{debug, trace};

fn descriptor<'t, S: State>(
    state: &S,
    table: &'t RuleTable<S>,
) -> Result<&'t TransitionDescriptor<S>, TransitionError<S>> {
    table.get(state).ok_or_else(|| TransitionError::UnknownState {
        state: state.clone(),
    })
}

/// Resolve the legal destinations out of `state`.
///
/// An explicit list is returned exactly as declared. The wildcard expands
/// to every state currently in the table, in table order. A state that is
/// a key with no destinations yields an empty list; a state that is not a
/// key is an error.
///
/// # Example
///
/// ```rust
/// use statute::engine::resolve_next_states;
/// use statute::rules::{RuleTable, TransitionDescriptor};
///
/// let table: RuleTable<String> = ["todo", "doing", "done"]
///     .into_iter()
///     .map(|s| (s.to_string(), TransitionDescriptor::any()))
///     .collect();
///
/// let next = resolve_next_states(&"todo".to_string(), &table).unwrap();
/// assert_eq!(next, ["todo", "doing", "done"]);
/// assert!(resolve_next_states(&"blocked".to_string(), &table).is_err());
/// ```
pub fn resolve_next_states<S: State>(
    state: &S,
    table: &RuleTable<S>,
) -> Result<Vec<S>, TransitionError<S>> {
    let resolved = match &descriptor(state, table)?.next {
        NextStates::Any => table.states().cloned().collect(),
        NextStates::Explicit(states) => states.clone(),
    };
    Ok(resolved)
}

/// Legal destinations out of `state`, for presenting choices to a user.
///
/// Same result as [`resolve_next_states`]; reading never changes the table.
pub fn next_states<S: State>(
    state: &S,
    table: &RuleTable<S>,
) -> Result<Vec<S>, TransitionError<S>> {
    resolve_next_states(state, table)
}

/// Check whether moving from `from` to `to` would be accepted.
///
/// The wildcard accepts any destination, including one that is not a key
/// in the table.
pub fn is_legal<S: State>(
    from: &S,
    to: &S,
    table: &RuleTable<S>,
) -> Result<bool, TransitionError<S>> {
    let legal = match &descriptor(from, table)?.next {
        NextStates::Any => true,
        NextStates::Explicit(states) => states.contains(to),
    };
    Ok(legal)
}

/// Validate and perform a transition, running arrival callbacks.
///
/// Returns the new state (equal to `requested`) on success. Rejections
/// return [`TransitionError::UnknownState`] or
/// [`TransitionError::IllegalTransition`] without running any callback.
///
/// Once accepted, the callbacks registered on `requested` run in
/// registration order, each receiving `current`. The first failure stops
/// the sequence and is returned as [`TransitionError::CallbackFailed`];
/// the transition still counts as performed, so the caller should treat
/// the error's `to` as its new state.
///
/// # Example
///
/// ```rust
/// use statute::engine::{transition, TransitionError};
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
/// let room = transition(&s("just right"), &s("too hot"), &table).unwrap();
/// assert_eq!(room, "too hot");
///
/// let err = transition(&room, &s("too cold"), &table).unwrap_err();
/// assert!(matches!(err, TransitionError::IllegalTransition { .. }));
/// ```
pub fn transition<S: State>(
    current: &S,
    requested: &S,
    table: &RuleTable<S>,
) -> Result<S, TransitionError<S>> {
    if !is_legal(current, requested, table)? {
        debug!(
            from = current.name(),
            to = requested.name(),
            "transition rejected"
        );
        return Err(TransitionError::IllegalTransition {
            from: current.clone(),
            to: requested.clone(),
        });
    }

    debug!(from = current.name(), to = requested.name(), "transition accepted");
    run_arrival_callbacks(current, requested, table)?;
    Ok(requested.clone())
}

/// Run the callbacks registered on `arrived`, in order, passing `previous`.
///
/// A destination with no descriptor has no callbacks.
pub(crate) fn run_arrival_callbacks<S: State>(
    previous: &S,
    arrived: &S,
    table: &RuleTable<S>,
) -> Result<(), TransitionError<S>> {
    let Some(descriptor) = table.get(arrived) else {
        return Ok(());
    };

    trace!(
        state = arrived.name(),
        callbacks = descriptor.callbacks.len(),
        "running arrival callbacks"
    );
    for (index, callback) in descriptor.callbacks.iter().enumerate() {
        callback.call(previous).map_err(|source| {
            debug!(
                from = previous.name(),
                to = arrived.name(),
                index,
                error = %source,
                "arrival callback failed"
            );
            TransitionError::CallbackFailed {
                from: previous.clone(),
                to: arrived.clone(),
                source,
            }
        })?;
    }
    Ok(())
}

/// Append `callback` to the arrival callbacks of `target`.
///
/// A state with no descriptor gets an empty one (no legal destinations)
/// appended to the table. Registering the same callback twice runs it twice.
pub fn register_callback<S: State>(target: S, callback: Callback<S>, table: &mut RuleTable<S>) {
    trace!(state = target.name(), "registering arrival callback");
    table.get_or_insert_default(target).callbacks.push(callback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn s(name: &str) -> String {
        name.to_string()
    }

    fn temperature() -> RuleTable<String> {
        [
            (s("too hot"), TransitionDescriptor::to([s("just right")])),
            (s("too cold"), TransitionDescriptor::to([s("just right")])),
            (
                s("just right"),
                TransitionDescriptor::to([s("too hot"), s("too cold")]),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn kanban() -> RuleTable<String> {
        ["todo", "doing", "done"]
            .into_iter()
            .map(|state| (s(state), TransitionDescriptor::any()))
            .collect()
    }

    fn recorder(log: &Arc<Mutex<Vec<String>>>, label: &str) -> Callback<String> {
        let log = Arc::clone(log);
        let label = label.to_string();
        Callback::infallible(move |prev: &String| {
            log.lock().unwrap().push(format!("{label}:{prev}"));
        })
    }

    #[test]
    fn explicit_next_states_are_returned_as_declared() {
        let mut table = temperature();
        table.insert(
            s("wobbly"),
            TransitionDescriptor::to([s("too hot"), s("too cold"), s("too hot")]),
        );

        assert_eq!(
            next_states(&s("wobbly"), &table).unwrap(),
            ["too hot", "too cold", "too hot"]
        );
    }

    #[test]
    fn wildcard_expands_to_all_states_in_order() {
        let table = kanban();
        assert_eq!(
            next_states(&s("doing"), &table).unwrap(),
            ["todo", "doing", "done"]
        );
    }

    #[test]
    fn wildcard_is_evaluated_at_query_time() {
        let mut table = kanban();
        table.insert(s("archived"), TransitionDescriptor::default());

        assert_eq!(
            next_states(&s("todo"), &table).unwrap(),
            ["todo", "doing", "done", "archived"]
        );
    }

    #[test]
    fn empty_next_differs_from_unknown_state() {
        let mut table = temperature();
        table.insert(s("off"), TransitionDescriptor::default());

        assert!(next_states(&s("off"), &table).unwrap().is_empty());
        assert!(matches!(
            next_states(&s("lukewarm"), &table),
            Err(TransitionError::UnknownState { state }) if state == "lukewarm"
        ));
    }

    #[test]
    fn legal_transition_returns_requested_state() {
        let table = temperature();
        let room = transition(&s("just right"), &s("too hot"), &table).unwrap();
        assert_eq!(room, "too hot");
        let room = transition(&room, &s("just right"), &table).unwrap();
        let room = transition(&room, &s("too cold"), &table).unwrap();
        assert_eq!(room, "too cold");
    }

    #[test]
    fn illegal_transition_carries_both_states() {
        let table = temperature();
        match transition(&s("too hot"), &s("too cold"), &table) {
            Err(TransitionError::IllegalTransition { from, to }) => {
                assert_eq!(from, "too hot");
                assert_eq!(to, "too cold");
            }
            other => panic!("expected illegal transition, got {other:?}"),
        }
    }

    #[test]
    fn transition_from_unknown_state_fails() {
        let table = temperature();
        assert!(matches!(
            transition(&s("lukewarm"), &s("just right"), &table),
            Err(TransitionError::UnknownState { .. })
        ));
    }

    #[test]
    fn no_implicit_self_loop() {
        let table = temperature();
        assert!(transition(&s("too hot"), &s("too hot"), &table).is_err());

        let table = kanban();
        assert_eq!(transition(&s("todo"), &s("todo"), &table).unwrap(), "todo");
    }

    #[test]
    fn wildcard_accepts_state_missing_from_table() {
        let table = kanban();
        let state = transition(&s("todo"), &s("blocked"), &table).unwrap();
        assert_eq!(state, "blocked");
        assert!(next_states(&state, &table).is_err());
    }

    #[test]
    fn is_legal_matches_transition_outcome() {
        let table = temperature();
        assert!(is_legal(&s("just right"), &s("too hot"), &table).unwrap());
        assert!(!is_legal(&s("too hot"), &s("too cold"), &table).unwrap());
        assert!(is_legal(&s("nowhere"), &s("too hot"), &table).is_err());
    }

    #[test]
    fn callbacks_run_in_registration_order_with_previous_state() {
        let mut table = temperature();
        let log = Arc::new(Mutex::new(Vec::new()));
        register_callback(s("too hot"), recorder(&log, "first"), &mut table);
        register_callback(s("too hot"), recorder(&log, "second"), &mut table);

        transition(&s("just right"), &s("too hot"), &table).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            ["first:just right", "second:just right"]
        );
    }

    #[test]
    fn rejected_transition_runs_no_callbacks() {
        let mut table = temperature();
        let log = Arc::new(Mutex::new(Vec::new()));
        register_callback(s("too cold"), recorder(&log, "cold"), &mut table);

        assert!(transition(&s("too hot"), &s("too cold"), &table).is_err());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn same_callback_registered_twice_runs_twice() {
        let mut table = kanban();
        let log = Arc::new(Mutex::new(Vec::new()));
        let callback = recorder(&log, "done");
        register_callback(s("done"), callback.clone(), &mut table);
        register_callback(s("done"), callback, &mut table);

        transition(&s("doing"), &s("done"), &table).unwrap();

        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn failing_callback_stops_later_callbacks() {
        let mut table = temperature();
        let log = Arc::new(Mutex::new(Vec::new()));
        register_callback(s("too hot"), recorder(&log, "before"), &mut table);
        register_callback(
            s("too hot"),
            Callback::new(|_: &String| Err("thermostat jammed".into())),
            &mut table,
        );
        register_callback(s("too hot"), recorder(&log, "after"), &mut table);

        let err = transition(&s("just right"), &s("too hot"), &table).unwrap_err();

        assert!(err.is_committed());
        match err {
            TransitionError::CallbackFailed { from, to, source } => {
                assert_eq!(from, "just right");
                assert_eq!(to, "too hot");
                assert_eq!(source.to_string(), "thermostat jammed");
            }
            other => panic!("expected callback failure, got {other:?}"),
        }
        assert_eq!(*log.lock().unwrap(), ["before:just right"]);
    }

    #[test]
    fn registering_on_unknown_state_creates_descriptor() {
        let mut table = temperature();
        let log = Arc::new(Mutex::new(Vec::new()));
        register_callback(s("scorching"), recorder(&log, "scorching"), &mut table);

        assert!(table.contains(&s("scorching")));
        assert!(next_states(&s("scorching"), &table).unwrap().is_empty());

        table.get_mut(&s("too hot")).unwrap().next =
            NextStates::explicit([s("just right"), s("scorching")]);
        transition(&s("too hot"), &s("scorching"), &table).unwrap();

        assert_eq!(*log.lock().unwrap(), ["scorching:too hot"]);
    }
}

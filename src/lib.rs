//! Statute: a rule-table driven finite-state transition engine
//!
//! Statute keeps state legality out of business code. A declarative
//! [`RuleTable`] says which transitions are legal from each state; the engine
//! validates requested transitions against it, runs the callbacks registered
//! on the destination, and reports which states are reachable next.
//!
//! # Core Concepts
//!
//! - **State**: any hashable identifier implementing the `State` trait
//! - **Rule Table**: ordered map from state to legal destinations and arrival callbacks
//! - **Wildcard**: `NextStates::Any`, meaning every state in the table
//! - **Engine**: stateless `transition` / `next_states` / `register_callback`
//! - **State Machine**: a current state and its table, with chaining and history
//!
//! # Example
//!
//! ```rust
//! use statute::{Callback, StateMachine, TransitionError};
//! use statute::builder::{DescriptorBuilder, RuleTableBuilder};
//! use std::sync::{Arc, Mutex};
//!
//! let s = |name: &str| name.to_string();
//! let table = RuleTableBuilder::new()
//!     .state(DescriptorBuilder::for_state(s("too hot")).to(s("just right")))?
//!     .state(DescriptorBuilder::for_state(s("too cold")).to(s("just right")))?
//!     .state(DescriptorBuilder::for_state(s("just right")).to(s("too hot")).to(s("too cold")))?
//!     .build()?;
//!
//! let messages = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&messages);
//! let mut room = StateMachine::new(s("just right"), table)?;
//! room.register_callback(
//!     s("too hot"),
//!     Callback::infallible(move |prev: &String| {
//!         sink.lock().unwrap().push(format!("It's too hot and it was {prev} before"));
//!     }),
//! );
//!
//! room.transition(s("too hot"))?;
//! assert_eq!(messages.lock().unwrap()[0], "It's too hot and it was just right before");
//!
//! let err = room.transition(s("too cold")).unwrap_err();
//! assert!(matches!(err, TransitionError::IllegalTransition { .. }));
//! assert_eq!(room.current_state(), "too hot");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use config::ConfigError;
pub use core::{State, StateHistory, StateTransition};
pub use engine::{next_states, register_callback, transition, TransitionError};
pub use machine::StateMachine;
pub use rules::{Callback, CallbackError, NextStates, RuleTable, TransitionDescriptor};

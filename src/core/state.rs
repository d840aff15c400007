//! Core State trait for state identifiers.
//!
//! A state is an opaque token: the engine only compares, hashes and clones
//! it. The trait adds a display name used in errors and log fields.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers held in a rule table.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records and errors
/// - `Eq` + `Hash`: states are rule table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: rule tables can be loaded from configuration
///
/// `String` implements this trait out of the box. Enum state types are most
/// easily declared with [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use statute::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("too hot".to_string().name(), "too hot");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

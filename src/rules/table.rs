//! Rule table and transition descriptors.

use super::callback::Callback;
use crate::core::State;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Legal destinations out of a state.
///
/// `Any` is the wildcard: every key present in the table at query time is
/// a legal destination. It is a variant rather than a reserved state name,
/// so no real state can collide with it.
///
/// In configuration text the variants are written as
/// `{"explicit": ["a", "b"]}` and `"any"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", bound = "")]
pub enum NextStates<S: State> {
    /// The listed states, in declaration order, duplicates kept
    Explicit(Vec<S>),
    /// Every state in the table
    Any,
}

impl<S: State> NextStates<S> {
    /// Explicit destinations from any iterator of states.
    pub fn explicit<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        NextStates::Explicit(states.into_iter().collect())
    }

    /// Explicit destinations with nothing in them.
    pub fn none() -> Self {
        NextStates::Explicit(Vec::new())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, NextStates::Any)
    }
}

impl<S: State> Default for NextStates<S> {
    fn default() -> Self {
        Self::none()
    }
}

/// Everything the table knows about one state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionDescriptor<S: State> {
    /// Where the machine may go from this state
    #[serde(default)]
    pub next: NextStates<S>,

    /// Run in order on every arrival at this state; never serialized
    #[serde(skip)]
    pub callbacks: Vec<Callback<S>>,
}

impl<S: State> TransitionDescriptor<S> {
    pub fn new(next: NextStates<S>) -> Self {
        Self {
            next,
            callbacks: Vec::new(),
        }
    }

    /// Descriptor allowing the listed destinations.
    pub fn to<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::new(NextStates::explicit(states))
    }

    /// Descriptor allowing every state in the table.
    pub fn any() -> Self {
        Self::new(NextStates::Any)
    }

    /// Append an arrival callback.
    pub fn with_callback(mut self, callback: Callback<S>) -> Self {
        self.callbacks.push(callback);
        self
    }
}

impl<S: State> Default for TransitionDescriptor<S> {
    fn default() -> Self {
        Self::new(NextStates::none())
    }
}

/// Insertion-ordered mapping from state to [`TransitionDescriptor`].
///
/// Key order is the order states were first inserted. Wildcard resolution
/// reports states in this order.
///
/// # Example
///
/// ```rust
/// use statute::rules::{RuleTable, TransitionDescriptor};
///
/// let mut table = RuleTable::new();
/// table.insert("too hot".to_string(), TransitionDescriptor::to(["just right".to_string()]));
/// table.insert("too cold".to_string(), TransitionDescriptor::to(["just right".to_string()]));
/// table.insert(
///     "just right".to_string(),
///     TransitionDescriptor::to(["too hot".to_string(), "too cold".to_string()]),
/// );
///
/// let states: Vec<&String> = table.states().collect();
/// assert_eq!(states, ["too hot", "too cold", "just right"]);
/// ```
#[derive(Clone, Debug)]
pub struct RuleTable<S: State> {
    order: Vec<S>,
    descriptors: HashMap<S, TransitionDescriptor<S>>,
}

impl<S: State> Default for RuleTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> RuleTable<S> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            descriptors: HashMap::new(),
        }
    }

    /// Insert or replace the descriptor for `state`.
    ///
    /// Replacing keeps the state's original position and returns the old
    /// descriptor, callbacks included.
    pub fn insert(
        &mut self,
        state: S,
        descriptor: TransitionDescriptor<S>,
    ) -> Option<TransitionDescriptor<S>> {
        if !self.descriptors.contains_key(&state) {
            self.order.push(state.clone());
        }
        self.descriptors.insert(state, descriptor)
    }

    pub fn get(&self, state: &S) -> Option<&TransitionDescriptor<S>> {
        self.descriptors.get(state)
    }

    pub fn get_mut(&mut self, state: &S) -> Option<&mut TransitionDescriptor<S>> {
        self.descriptors.get_mut(state)
    }

    /// Descriptor for `state`, appending an empty one if the state is new.
    pub fn get_or_insert_default(&mut self, state: S) -> &mut TransitionDescriptor<S> {
        if !self.descriptors.contains_key(&state) {
            self.order.push(state.clone());
        }
        self.descriptors.entry(state).or_default()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.descriptors.contains_key(state)
    }

    /// All states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.order.iter()
    }

    /// States paired with their descriptors, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &TransitionDescriptor<S>)> + '_ {
        self.order
            .iter()
            .filter_map(move |state| self.descriptors.get(state).map(|d| (state, d)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: State> FromIterator<(S, TransitionDescriptor<S>)> for RuleTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, TransitionDescriptor<S>)>>(iter: I) -> Self {
        let mut table = RuleTable::new();
        for (state, descriptor) in iter {
            table.insert(state, descriptor);
        }
        table
    }
}

impl<S: State> Serialize for RuleTable<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (state, descriptor) in self.iter() {
            map.serialize_entry(state, descriptor)?;
        }
        map.end()
    }
}

impl<'de, S: State> Deserialize<'de> for RuleTable<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor<S>(PhantomData<S>);

        impl<'de, S: State> Visitor<'de> for TableVisitor<S> {
            type Value = RuleTable<S>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of states to transition descriptors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut table = RuleTable::new();
                while let Some((state, descriptor)) =
                    map.next_entry::<S, TransitionDescriptor<S>>()?
                {
                    if table.contains(&state) {
                        return Err(de::Error::custom(format_args!(
                            "duplicate state '{}'",
                            state.name()
                        )));
                    }
                    table.insert(state, descriptor);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

//! Builder for constructing rule tables.

use crate::builder::descriptor::DescriptorBuilder;
use crate::builder::error::BuildError;
use crate::core::State;
use crate::rules::{RuleTable, TransitionDescriptor};

/// Builder for constructing rule tables with a fluent API.
///
/// States keep the order they are added in. Describing the same state twice
/// is reported by `build`.
pub struct RuleTableBuilder<S: State> {
    entries: Vec<(S, TransitionDescriptor<S>)>,
}

impl<S: State> RuleTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a state using a descriptor builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: DescriptorBuilder<S>) -> Result<Self, BuildError> {
        self.entries.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built descriptor.
    pub fn add_state(mut self, state: S, descriptor: TransitionDescriptor<S>) -> Self {
        self.entries.push((state, descriptor));
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TransitionDescriptor<S>)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Build the rule table.
    pub fn build(self) -> Result<RuleTable<S>, BuildError> {
        if self.entries.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        let mut table = RuleTable::new();
        for (state, descriptor) in self.entries {
            if table.contains(&state) {
                return Err(BuildError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
            table.insert(state, descriptor);
        }

        Ok(table)
    }
}

impl<S: State> Default for RuleTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::NextStates;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn builder_requires_states() {
        let result = RuleTableBuilder::<String>::new().build();
        assert!(matches!(result, Err(BuildError::EmptyTable)));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = RuleTableBuilder::new()
            .state(DescriptorBuilder::for_state(s("too hot")).to(s("just right")))
            .unwrap()
            .state(DescriptorBuilder::for_state(s("too cold")).to(s("just right")))
            .unwrap()
            .state(
                DescriptorBuilder::for_state(s("just right"))
                    .to(s("too hot"))
                    .to(s("too cold")),
            )
            .unwrap()
            .build()
            .unwrap();

        let states: Vec<&String> = table.states().collect();
        assert_eq!(states, ["too hot", "too cold", "just right"]);
        assert_eq!(
            table.get(&s("just right")).unwrap().next,
            NextStates::Explicit(vec![s("too hot"), s("too cold")])
        );
    }

    #[test]
    fn invalid_descriptor_stops_the_chain() {
        let result = RuleTableBuilder::new().state(DescriptorBuilder::for_state(s("todo")));
        assert!(matches!(
            result,
            Err(BuildError::MissingNextStates { .. })
        ));
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let result = RuleTableBuilder::new()
            .add_state(s("todo"), TransitionDescriptor::any())
            .states([
                (s("doing"), TransitionDescriptor::any()),
                (s("todo"), TransitionDescriptor::default()),
            ])
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateState { state: s("todo") }
        );
    }
}

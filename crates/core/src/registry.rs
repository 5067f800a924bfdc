//! Condition type registry (host side).
//!
//! Hosts keep one registry per policy engine. Plugins contribute condition
//! types through [`EntitlementModule`]; stored policies are turned back into
//! live conditions with [`ConditionRegistry::load_condition`].

use std::collections::HashMap;

use crate::{EntitlementCondition, EntitlementError, EntitlementResult};

/// Constructor for a condition in its default configuration.
pub type ConditionFactory = fn() -> Box<dyn EntitlementCondition>;

/// A plugin that contributes condition types to a registry.
pub trait EntitlementModule {
    fn register_custom_types(&self, registry: &mut ConditionRegistry);
}

#[derive(Debug, Clone, Default)]
pub struct ConditionRegistry {
    factories: HashMap<String, ConditionFactory>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`. A later registration under the same
    /// name replaces the earlier one.
    pub fn register_condition_type(&mut self, name: impl Into<String>, factory: ConditionFactory) {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::warn!(condition_type = %name, "replacing registered condition type");
        } else {
            tracing::debug!(condition_type = %name, "registered condition type");
        }
    }

    /// Let `module` register its condition types.
    pub fn install(&mut self, module: &dyn EntitlementModule) {
        module.register_custom_types(self);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn condition_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Instantiate a condition in its default configuration.
    pub fn new_condition(&self, name: &str) -> EntitlementResult<Box<dyn EntitlementCondition>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| EntitlementError::unknown_condition_type(name))?;
        Ok(factory())
    }

    /// Instantiate a condition, apply a stored configuration and validate it.
    pub fn load_condition(&self, name: &str, state: &str) -> EntitlementResult<Box<dyn EntitlementCondition>> {
        let mut condition = self.new_condition(name)?;
        condition.set_state(state)?;
        condition.validate()?;
        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use core::any::Any;

    use super::*;
    use crate::{ConditionDecision, Environment, Subject, ValueObject, same_condition};

    /// Grants access when the subject has at least `min` principals.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    struct MinPrincipals {
        min: usize,
    }

    impl ValueObject for MinPrincipals {}

    impl EntitlementCondition for MinPrincipals {
        fn condition_type(&self) -> &'static str {
            "MinPrincipals"
        }

        fn state(&self) -> EntitlementResult<String> {
            Ok(self.min.to_string())
        }

        fn set_state(&mut self, state: &str) -> EntitlementResult<()> {
            self.min = state
                .trim()
                .parse()
                .map_err(|e| EntitlementError::configuration_parse(format!("{e}")))?;
            Ok(())
        }

        fn validate(&self) -> EntitlementResult<()> {
            if self.min > 8 {
                return Err(EntitlementError::invalid_property("min", self.min));
            }
            Ok(())
        }

        fn evaluate(
            &self,
            _realm: &str,
            subject: &Subject,
            _resource: &str,
            _environment: &Environment,
        ) -> EntitlementResult<ConditionDecision> {
            if subject.principals().len() >= self.min {
                Ok(ConditionDecision::allow())
            } else {
                Ok(ConditionDecision::deny(Default::default()))
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn eq_condition(&self, other: &dyn EntitlementCondition) -> bool {
            same_condition(self, other)
        }
    }

    struct TestModule;

    impl EntitlementModule for TestModule {
        fn register_custom_types(&self, registry: &mut ConditionRegistry) {
            registry.register_condition_type("MinPrincipals", || Box::new(MinPrincipals::default()));
        }
    }

    #[test]
    fn installed_module_types_are_listed() {
        let mut registry = ConditionRegistry::new();
        assert!(!registry.is_registered("MinPrincipals"));

        registry.install(&TestModule);

        assert!(registry.is_registered("MinPrincipals"));
        assert_eq!(registry.condition_types(), vec!["MinPrincipals"]);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let registry = ConditionRegistry::new();
        let err = registry.new_condition("Nope").unwrap_err();
        assert_eq!(err, EntitlementError::UnknownConditionType("Nope".to_string()));
    }

    #[test]
    fn load_condition_applies_state_and_validates() {
        let mut registry = ConditionRegistry::new();
        registry.install(&TestModule);

        let condition = registry.load_condition("MinPrincipals", "2").unwrap();
        assert_eq!(condition.state().unwrap(), "2");

        let expected: Box<dyn EntitlementCondition> = Box::new(MinPrincipals { min: 2 });
        assert!(*condition == *expected);

        let err = registry.load_condition("MinPrincipals", "9").unwrap_err();
        assert!(matches!(err, EntitlementError::InvalidPropertyValue { .. }));

        let err = registry.load_condition("MinPrincipals", "two").unwrap_err();
        assert!(matches!(err, EntitlementError::ConfigurationParse(_)));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = ConditionRegistry::new();
        registry.register_condition_type("MinPrincipals", || Box::new(MinPrincipals { min: 1 }));
        registry.register_condition_type("MinPrincipals", || Box::new(MinPrincipals { min: 3 }));

        let condition = registry.new_condition("MinPrincipals").unwrap();
        assert_eq!(condition.state().unwrap(), "3");
        assert_eq!(registry.condition_types().len(), 1);
    }
}

//! The capability a host framework invokes on a pluggable condition.

use core::any::Any;

use crate::{ConditionDecision, EntitlementResult, Environment, Subject, ValueObject};

/// A single policy condition.
///
/// Implementations are plain values: configuration goes in through
/// [`set_state`](Self::set_state), decisions come out of
/// [`evaluate`](Self::evaluate). Evaluation must not mutate the condition,
/// so a configured condition can be shared across threads.
pub trait EntitlementCondition: core::fmt::Debug + Send + Sync + Any {
    /// Type name the condition is registered under.
    fn condition_type(&self) -> &'static str;

    /// Serialize the full configuration. The result must be accepted by
    /// [`set_state`](Self::set_state).
    fn state(&self) -> EntitlementResult<String>;

    /// Replace the configuration from a serialized document.
    fn set_state(&mut self, state: &str) -> EntitlementResult<()>;

    /// Check the current configuration.
    fn validate(&self) -> EntitlementResult<()>;

    /// Decide whether `subject` may access `resource` in `realm`.
    fn evaluate(
        &self,
        realm: &str,
        subject: &Subject,
        resource: &str,
        environment: &Environment,
    ) -> EntitlementResult<ConditionDecision>;

    fn as_any(&self) -> &dyn Any;

    /// Value equality across the trait object boundary.
    fn eq_condition(&self, other: &dyn EntitlementCondition) -> bool;
}

impl PartialEq for dyn EntitlementCondition {
    fn eq(&self, other: &Self) -> bool {
        self.eq_condition(other)
    }
}

/// Helper for [`EntitlementCondition::eq_condition`]: `other` must be the
/// same concrete type and compare equal by value.
pub fn same_condition<C>(this: &C, other: &dyn EntitlementCondition) -> bool
where
    C: EntitlementCondition + ValueObject,
{
    other
        .as_any()
        .downcast_ref::<C>()
        .is_some_and(|other| this == other)
}

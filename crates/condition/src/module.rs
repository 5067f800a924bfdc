use darkedges_core::{ConditionRegistry, EntitlementCondition, EntitlementModule};

use crate::{CONDITION_TYPE, DarkEdgesCondition};

/// Plugin entry point: registers [`DarkEdgesCondition`] with a host registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct DarkEdgesEntitlementModule;

impl EntitlementModule for DarkEdgesEntitlementModule {
    fn register_custom_types(&self, registry: &mut ConditionRegistry) {
        registry.register_condition_type(CONDITION_TYPE, new_condition);
    }
}

fn new_condition() -> Box<dyn EntitlementCondition> {
    Box::new(DarkEdgesCondition::new())
}

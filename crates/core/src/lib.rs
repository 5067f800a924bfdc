//! `darkedges-core` — entitlement condition contract.
//!
//! This crate holds the types a host policy framework exchanges with a
//! pluggable condition (no policy storage, no transport).

pub mod condition;
pub mod decision;
pub mod error;
pub mod registry;
pub mod subject;
pub mod value_object;

pub use condition::{EntitlementCondition, same_condition};
pub use decision::{Advice, ConditionDecision, Environment};
pub use error::{EntitlementError, EntitlementResult};
pub use registry::{ConditionFactory, ConditionRegistry, EntitlementModule};
pub use subject::{Principal, Subject};
pub use value_object::ValueObject;

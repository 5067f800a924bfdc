//! Minimum name-length condition.

use core::any::Any;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use darkedges_core::{
    Advice, ConditionDecision, EntitlementCondition, EntitlementError, EntitlementResult, Environment,
    Principal, Subject, ValueObject, same_condition,
};

use crate::dn;

/// Type name hosts register and look the condition up by.
pub const CONDITION_TYPE: &str = "DarkEdgesCondition";

/// Configuration field holding the minimum length.
pub const LENGTH_FIELD: &str = "nameLength";

/// Advice key attached to denied decisions.
pub const ADVICE_KEY: &str = "DarkEdgesConditionAdvice";

/// Grants access when the value of the subject's leading RDN
/// (`uid=<value>,...`) is at least `nameLength` characters long.
///
/// Denied decisions carry [`ADVICE_KEY`] advice with the required length, so
/// a client can tell what would satisfy the condition.
///
/// `set_name_length` and `set_state` accept any integer; range checking
/// happens in [`validate`](EntitlementCondition::validate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkEdgesCondition {
    name_length: i32,
}

impl DarkEdgesCondition {
    /// A condition with the default minimum length of 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_name_length(name_length: i32) -> Self {
        Self { name_length }
    }

    pub fn name_length(&self) -> i32 {
        tracing::trace!(name_length = self.name_length, "name_length");
        self.name_length
    }

    pub fn set_name_length(&mut self, name_length: i32) {
        tracing::debug!(name_length, "set_name_length");
        self.name_length = name_length;
    }

    fn is_allowed(&self, principal: &Principal) -> EntitlementResult<ConditionDecision> {
        let user_dn = principal.name();
        let name = dn::extract_name(user_dn).map_err(|err| {
            tracing::warn!(principal = user_dn, %err, "principal name is not a DN");
            EntitlementError::evaluation_failed(format!("Name is not a valid DN: {user_dn}"))
        })?;

        // UTF-16 code units, so supplementary-plane characters count twice.
        let length = name.encode_utf16().count();
        // A negative minimum (invalid, but not rejected until validate) is always met.
        let satisfied = usize::try_from(self.name_length).map_or(true, |min| length >= min);
        if satisfied {
            return Ok(ConditionDecision::allow());
        }

        tracing::debug!(length, required = self.name_length, "name shorter than required");
        let advice = Advice::from([(
            ADVICE_KEY.to_string(),
            HashSet::from([self.name_length.to_string()]),
        )]);
        Ok(ConditionDecision::deny(advice))
    }
}

impl ValueObject for DarkEdgesCondition {}

impl EntitlementCondition for DarkEdgesCondition {
    fn condition_type(&self) -> &'static str {
        CONDITION_TYPE
    }

    fn state(&self) -> EntitlementResult<String> {
        tracing::debug!("state");
        serde_json::to_string(self).map_err(|e| EntitlementError::serialization(e.to_string()))
    }

    /// Fields other than `nameLength` are ignored. On error the current
    /// configuration is left untouched.
    fn set_state(&mut self, state: &str) -> EntitlementResult<()> {
        tracing::debug!(state, "set_state");
        let parsed: DarkEdgesCondition = serde_json::from_str(state).map_err(|e| {
            tracing::warn!(state, error = %e, "rejected condition state");
            EntitlementError::configuration_parse(e.to_string())
        })?;
        self.set_name_length(parsed.name_length);
        Ok(())
    }

    fn validate(&self) -> EntitlementResult<()> {
        tracing::debug!(name_length = self.name_length, "validate");
        if self.name_length < 0 {
            return Err(EntitlementError::invalid_property(LENGTH_FIELD, self.name_length));
        }
        Ok(())
    }

    /// `realm`, `resource` and `environment` are only traced; the decision
    /// depends on the first principal alone.
    fn evaluate(
        &self,
        realm: &str,
        subject: &Subject,
        resource: &str,
        environment: &Environment,
    ) -> EntitlementResult<ConditionDecision> {
        tracing::debug!(
            realm,
            resource,
            principals = subject.principals().len(),
            ?environment,
            "evaluate"
        );

        let Some(principal) = subject.first_principal() else {
            tracing::warn!("no subject supplied");
            return Err(EntitlementError::SubjectRequired);
        };
        self.is_allowed(principal)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_condition(&self, other: &dyn EntitlementCondition) -> bool {
        same_condition(self, other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Entitlement error model.

use thiserror::Error;

/// Result type used by conditions and the registry.
pub type EntitlementResult<T> = Result<T, EntitlementError>;

/// Failure raised while configuring or evaluating a condition.
///
/// Every variant is returned synchronously from the call that detected it;
/// an evaluation either yields a full decision or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntitlementError {
    /// The subject carried no principals.
    #[error("Subjects are required.")]
    SubjectRequired,

    /// The request could not be evaluated (e.g. malformed principal name).
    #[error("Condition evaluation fails. {0}")]
    ConditionEvaluationFailed(String),

    /// The configuration document could not be parsed.
    #[error("Unable to parse condition state: {0}")]
    ConfigurationParse(String),

    /// A configured property holds a value outside its allowed range.
    #[error("Invalid value {value} for property {property}")]
    InvalidPropertyValue { property: String, value: String },

    /// The configuration could not be encoded.
    #[error("Unable to serialize condition state: {0}")]
    Serialization(String),

    /// No constructor is registered under the requested condition type.
    #[error("Condition type '{0}' is not registered")]
    UnknownConditionType(String),
}

impl EntitlementError {
    pub fn evaluation_failed(msg: impl Into<String>) -> Self {
        Self::ConditionEvaluationFailed(msg.into())
    }

    pub fn configuration_parse(msg: impl Into<String>) -> Self {
        Self::ConfigurationParse(msg.into())
    }

    pub fn invalid_property(property: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidPropertyValue {
            property: property.into(),
            value: value.to_string(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn unknown_condition_type(name: impl Into<String>) -> Self {
        Self::UnknownConditionType(name.into())
    }
}

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Advice attached to a negative decision: key → unordered set of values.
pub type Advice = HashMap<String, HashSet<String>>;

/// Request environment supplied by the host (attribute → values).
pub type Environment = HashMap<String, HashSet<String>>;

/// Outcome of evaluating a single condition.
///
/// Built only through [`allow`](Self::allow) and [`deny`](Self::deny), so
/// advice is never attached to an authorized decision. The default is a
/// denial without advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConditionDecision {
    authorized: bool,
    advice: Advice,
}

impl ConditionDecision {
    pub fn allow() -> Self {
        Self {
            authorized: true,
            advice: Advice::new(),
        }
    }

    pub fn deny(advice: Advice) -> Self {
        Self {
            authorized: false,
            advice,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn advice(&self) -> &Advice {
        &self.advice
    }
}

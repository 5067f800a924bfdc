use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// An identifying credential carried by a [`Subject`].
///
/// The name is opaque at this layer. Conditions decide how to interpret it
/// (typically a distinguished name such as `uid=alice,ou=people,dc=example,dc=com`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(Cow<'static, str>);

impl Principal {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Principal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity a request is made on behalf of.
///
/// Principals behave like a set: adding a duplicate is ignored. Insertion
/// order is kept so "the first principal" is well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    principals: Vec<Principal>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a principal. Returns `false` if it was already present.
    pub fn add_principal(&mut self, principal: Principal) -> bool {
        if self.principals.contains(&principal) {
            return false;
        }
        self.principals.push(principal);
        true
    }

    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.add_principal(principal);
        self
    }

    pub fn principals(&self) -> &[Principal] {
        &self.principals
    }

    pub fn first_principal(&self) -> Option<&Principal> {
        self.principals.first()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

impl FromIterator<Principal> for Subject {
    fn from_iter<I: IntoIterator<Item = Principal>>(iter: I) -> Self {
        let mut subject = Subject::new();
        for principal in iter {
            subject.add_principal(principal);
        }
        subject
    }
}

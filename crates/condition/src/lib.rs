//! `darkedges-condition` — the DarkEdges name-length entitlement condition.
//!
//! The condition reads the name component of the subject's distinguished
//! name and requires it to be at least `nameLength` characters long.

pub mod dn;
pub mod module;
pub mod name_length;

pub use dn::{DnParseError, extract_name};
pub use module::DarkEdgesEntitlementModule;
pub use name_length::{ADVICE_KEY, CONDITION_TYPE, DarkEdgesCondition, LENGTH_FIELD};

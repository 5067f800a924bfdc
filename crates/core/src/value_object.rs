//! Value object trait: equality by value, not identity.

/// Marker trait for condition configurations compared by value.
///
/// Two conditions of the same type holding the same configuration are
/// interchangeable: hosts may deduplicate them, use them as map keys, or
/// compare a freshly loaded policy against a cached one.
///
/// The trait requires:
/// - **Clone**: configurations are small and copied freely
/// - **Eq + Hash**: hashing must agree with equality, so it may only read
///   the fields that equality reads
/// - **Debug**: configurations show up in trace events and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct MinLength { min: i32 }
///
/// impl ValueObject for MinLength {}
///
/// assert_eq!(MinLength { min: 5 }, MinLength { min: 5 });
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// holding the same values are the same value. To "modify" one, build a new
/// one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Handle(String);
///
/// impl ValueObject for Handle {}
///
/// assert_eq!(Handle("a".into()), Handle("a".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. To "modify" one, build
/// a new one. `Money { minor: 1050 }` is a value object; an `Invoice` with an
/// identifier is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

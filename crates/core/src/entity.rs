//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is the same entity as long as its id matches, whatever its
/// attribute values. `Invoice` is the one entity in this system.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

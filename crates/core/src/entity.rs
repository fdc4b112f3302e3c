//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Products and customers are both entities: a stock flip or a membership change
/// mutates the record but never its identity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

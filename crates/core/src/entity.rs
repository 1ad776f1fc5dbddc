//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Purchase orders and stocked medicines are entities: two records with the
/// same figures are still different records if their ids differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

//! Domain Layer - Core Entity Trait
//!
//! Every inventory node (container or item) has a backend-assigned id.

/// Container primary key as issued by the backend
pub type ContainerId = u32;

/// Item primary key as issued by the backend
pub type ItemId = u32;

/// Core trait for inventory nodes
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;

    /// Short prefix used to build row keys that stay unique across kinds
    const KEY_PREFIX: &'static str;

    /// Row key, e.g. `c-7` for container 7
    fn row_key(&self) -> String {
        format!("{}-{}", Self::KEY_PREFIX, self.id())
    }
}

//! Domain Layer
//!
//! Inventory entities as exchanged with the REST backend.
//! This layer has NO external dependencies (except serde for serialization).

mod container;
mod entity;
mod item;

pub use container::{ContainerRef, ContainerSummary, ContainerType, SearchResult};
pub use entity::{ContainerId, Entity, ItemId};
pub use item::{ContainerContents, ItemSummary, NewItem};

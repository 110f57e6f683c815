//! Container Entity
//!
//! Containers form a hierarchy and hold items and other containers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::{ContainerId, Entity};

/// Physical kind of a container, stored by the backend as a two-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContainerType {
    #[default]
    #[serde(rename = "BX")]
    Box,
    #[serde(rename = "SL")]
    Shelf,
    #[serde(rename = "DR")]
    Drawer,
    #[serde(rename = "RM")]
    Room,
    #[serde(rename = "SR")]
    Surface,
    #[serde(rename = "WL")]
    Wall,
    #[serde(rename = "OT")]
    Other,
}

impl ContainerType {
    /// Lower-case name shown next to the row kind
    pub fn verbose(&self) -> &'static str {
        match self {
            ContainerType::Box => "box",
            ContainerType::Shelf => "shelf",
            ContainerType::Drawer => "drawer",
            ContainerType::Room => "room",
            ContainerType::Surface => "surface",
            ContainerType::Wall => "wall",
            ContainerType::Other => "other",
        }
    }
}

/// The container currently being browsed, used as the default parent for new items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRef {
    pub id: ContainerId,
    pub name: String,
}

impl ContainerRef {
    pub fn new(id: ContainerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// One hit from the container search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ContainerId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} at {}", self.name, self.location)
        }
    }
}

/// A child container as listed in a contents view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: ContainerId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub container_type: ContainerType,
    #[serde(default)]
    pub parent: Option<ContainerId>,
}

impl ContainerSummary {
    /// Browse route for this container
    pub fn link(&self) -> String {
        format!("/browse/{}", self.id)
    }

    pub fn to_container_ref(&self) -> ContainerRef {
        ContainerRef::new(self.id, self.name.clone())
    }
}

impl Entity for ContainerSummary {
    type Id = ContainerId;
    const KEY_PREFIX: &'static str = "c";

    fn id(&self) -> Self::Id {
        self.id
    }
}

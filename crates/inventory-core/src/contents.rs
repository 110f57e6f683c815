//! Contents Table Rows
//!
//! Flattens a [`ContainerContents`] listing into display rows:
//! child containers first, then items, each in listing order.

use crate::domain::{ContainerContents, Entity};

/// Message shown when a container has nothing to list
pub const EMPTY_MESSAGE: &str = "This container is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Container,
    Item,
}

impl RowKind {
    pub fn label(&self) -> &'static str {
        match self {
            RowKind::Container => "Container",
            RowKind::Item => "Item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsRow {
    pub key: String,
    pub kind: RowKind,
    /// Text of the Type column
    pub type_label: String,
    pub label: String,
    /// Browse link, containers only
    pub link: Option<String>,
    pub location: String,
    pub description: String,
    pub low_stock: bool,
}

/// Rows for the table body; empty when the listing is absent or has no children
pub fn contents_rows(contents: Option<&ContainerContents>) -> Vec<ContentsRow> {
    let Some(contents) = contents else {
        return Vec::new();
    };

    let containers = contents.containers.iter().map(|c| ContentsRow {
        key: c.row_key(),
        kind: RowKind::Container,
        type_label: format!("{} ({})", RowKind::Container.label(), c.container_type.verbose()),
        label: c.name.clone(),
        link: Some(c.link()),
        location: c.location.clone(),
        description: c.description.clone(),
        low_stock: false,
    });
    let items = contents.items.iter().map(|i| ContentsRow {
        key: i.row_key(),
        kind: RowKind::Item,
        type_label: RowKind::Item.label().to_string(),
        label: format!("{} x {}", i.name, i.quantity),
        link: None,
        location: i.location.clone(),
        description: i.description.clone(),
        low_stock: i.is_low_stock(),
    });
    containers.chain(items).collect()
}

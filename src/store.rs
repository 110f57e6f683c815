//! Browse State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_core::{ContainerContents, ContainerId, ContainerRef};

/// What the browse page is showing
#[derive(Clone, Debug, Default, Store)]
pub struct BrowseState {
    /// Container id from the page path (None = root)
    pub container_id: Option<ContainerId>,
    /// Id and name of the browsed container, once loaded
    pub container: Option<ContainerRef>,
    /// Children of the browsed container; None until loaded
    pub contents: Option<ContainerContents>,
    pub loading: bool,
    /// Last load failure, shown above the table
    pub error: Option<String>,
}

impl BrowseState {
    pub fn new(container_id: Option<ContainerId>) -> Self {
        Self {
            container_id,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BrowseStore = Store<BrowseState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &BrowseStore) {
    *store.loading().write() = true;
    *store.error().write() = None;
}

pub fn store_set_contents(store: &BrowseStore, contents: ContainerContents) {
    *store.contents().write() = Some(contents);
    *store.loading().write() = false;
}

pub fn store_set_error(store: &BrowseStore, error: String) {
    *store.error().write() = Some(error);
    *store.loading().write() = false;
}

/// Path of a browse page, e.g. `/browse/7`
pub fn parse_browse_path(path: &str) -> Option<ContainerId> {
    path.trim_end_matches('/')
        .strip_prefix("/browse/")
        .and_then(|id| id.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_browse_path() {
        assert_eq!(parse_browse_path("/browse/7"), Some(7));
        assert_eq!(parse_browse_path("/browse/7/"), Some(7));
        assert_eq!(parse_browse_path("/browse/"), None);
        assert_eq!(parse_browse_path("/browse/shelf"), None);
        assert_eq!(parse_browse_path("/"), None);
    }
}

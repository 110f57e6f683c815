//! UI Components
//!
//! Reusable Leptos components.

mod container_search;
mod contents_table;
mod item_editor_form;
mod item_editor_modal;

pub use container_search::ContainerSearch;
pub use contents_table::ContentsTable;
pub use item_editor_form::ItemEditorForm;
pub use item_editor_modal::ItemEditorModal;

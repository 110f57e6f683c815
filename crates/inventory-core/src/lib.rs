//! Inventory Core
//!
//! UI state for the inventory browser, independent of any view framework:
//! - domain: entities exchanged with the REST backend
//! - search / selection: the parent-container typeahead
//! - form / editor: the item draft and the create-item modal lifecycle
//! - api: the backend seam and the token-then-create submission
//! - contents: rows for the contents table

pub mod api;
pub mod contents;
pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod search;
pub mod selection;

pub use api::{submit_item, CsrfToken, InventoryApi};
pub use contents::{contents_rows, ContentsRow, RowKind, EMPTY_MESSAGE};
pub use domain::*;
pub use editor::{ItemEditor, SaveOutcome, SaveTicket};
pub use error::{ApiError, FieldError};
pub use form::{ItemField, ItemForm, PARENT_FIELD};
pub use search::{RemoteSearch, SearchTicket, MIN_QUERY_LEN};
pub use selection::{ContainerPicker, InputOutcome, SelectionChange};

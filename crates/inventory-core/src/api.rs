//! Backend API Seam
//!
//! Abstract interface to the inventory REST backend. The browser client
//! implements it over HTTP; tests use an in-memory fake.

use async_trait::async_trait;

use crate::domain::{ContainerContents, ContainerId, ContainerSummary, NewItem, SearchResult};
use crate::error::ApiError;

/// CSRF token required on mutating requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(pub String);

impl CsrfToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Operations the UI needs from the backend.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait InventoryApi {
    /// `GET /api/containers/search?text__contains=<query>`
    async fn search_containers(&self, query: &str) -> Result<Vec<SearchResult>, ApiError>;

    /// Acquire the CSRF token. Safe to call repeatedly.
    async fn acquire_csrf_token(&self) -> Result<CsrfToken, ApiError>;

    /// `POST /api/items/`; the response body is not used
    async fn create_item(&self, token: &CsrfToken, item: &NewItem) -> Result<(), ApiError>;

    async fn get_container(&self, id: ContainerId) -> Result<ContainerSummary, ApiError>;

    /// Children of `parent`, or of the root when `None`
    async fn get_contents(&self, parent: Option<ContainerId>) -> Result<ContainerContents, ApiError>;
}

/// Token first, then the create request. A token failure is returned like any other.
pub async fn submit_item<A>(api: &A, item: &NewItem) -> Result<(), ApiError>
where
    A: InventoryApi + ?Sized,
{
    let token = api.acquire_csrf_token().await?;
    log::debug!("[api] creating item {:?} under {:?}", item.name, item.parent);
    api.create_item(&token, item).await
}


#[cfg(test)]
mod tests {
    use super::fake::FakeApi;
    use super::*;
    use crate::domain::ContainerRef;
    use crate::editor::{ItemEditor, SaveOutcome};

    #[tokio::test]
    async fn test_token_acquired_before_create() {
        let api = FakeApi::default();
        let item = NewItem { name: "Widget".to_string(), ..Default::default() };

        submit_item(&api, &item).await.expect("submit should succeed");

        assert_eq!(*api.calls.borrow(), vec!["csrf", "create"]);
        let posted = api.posted.borrow();
        assert_eq!(posted[0].0.as_str(), "tok-123");
        assert_eq!(posted[0].1, item);
    }

    #[tokio::test]
    async fn test_token_failure_skips_create() {
        let api = FakeApi {
            token_error: Some(ApiError::MissingCsrfToken),
            ..Default::default()
        };
        let err = submit_item(&api, &NewItem::default()).await.unwrap_err();

        assert_eq!(err, ApiError::MissingCsrfToken);
        assert_eq!(*api.calls.borrow(), vec!["csrf"]);
        assert!(api.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_widget_on_shelf_scenario() {
        let api = FakeApi::default();
        let mut editor = ItemEditor::new(None);
        editor.open(Some(ContainerRef::new(7, "Shelf A")));
        editor.form_mut().change_field("name", "Widget").unwrap();

        let ticket = editor.begin_save().unwrap();
        let result = submit_item(&api, &ticket.payload).await;
        assert_eq!(editor.finish_save(&ticket, result), SaveOutcome::Saved);

        let body = serde_json::to_value(&api.posted.borrow()[0].1).unwrap();
        assert_eq!(body["name"], "Widget");
        assert_eq!(body["parent"], 7);
        assert_eq!(body["quantity"], 0);
        assert!(!editor.is_visible());
    }

    #[tokio::test]
    async fn test_picker_search_round() {
        use crate::selection::ContainerPicker;

        let api = FakeApi {
            hits: vec![
                SearchResult { id: 7, name: "Shelf A".into(), location: "Garage".into(), description: String::new() },
                SearchResult { id: 8, name: "Shelf B".into(), location: "Garage".into(), description: String::new() },
                SearchResult { id: 9, name: "Bin".into(), location: String::new(), description: String::new() },
            ],
            ..Default::default()
        };
        let mut picker = ContainerPicker::new("parent", None);

        let ticket = picker.on_input("shelf").ticket.unwrap();
        assert!(picker.search().is_loading());
        let result = api.search_containers(&ticket.query).await;
        assert!(picker.complete_search(&ticket, result));

        let names: Vec<&str> = picker.search().options().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Shelf A", "Shelf B"]);
        assert_eq!(*api.calls.borrow(), vec!["search:shelf"]);

        let chosen = picker.search().options()[1].clone();
        let change = picker.select(vec![chosen]);
        assert_eq!(change.option.map(|o| o.id), Some(8));
    }

    #[tokio::test]
    async fn test_token_and_create_failures_look_the_same() {
        let rejected = ApiError::Rejected { status: 403, body: String::new() };
        for api in [
            FakeApi { token_error: Some(rejected.clone()), ..Default::default() },
            FakeApi { create_error: Some(rejected.clone()), ..Default::default() },
        ] {
            let mut editor = ItemEditor::new(None);
            editor.open(None);
            editor.form_mut().change_field("name", "Widget").unwrap();

            let ticket = editor.begin_save().unwrap();
            let result = submit_item(&api, &ticket.payload).await;
            assert_eq!(editor.finish_save(&ticket, result), SaveOutcome::Failed);
            assert_eq!(editor.error_message(), Some("Request failed with status code 403"));
            assert_eq!(editor.form().draft().name, "Widget");
        }
    }
}

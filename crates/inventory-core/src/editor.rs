//! Item Editor Lifecycle
//!
//! Modal visibility plus the save state machine:
//! `Idle -> Submitting -> (closed | Failed)`.
//!
//! Every open/close starts a new session. A save result carries the session
//! it was started in and is dropped if the modal has been closed or reopened
//! since.

use crate::domain::{ContainerRef, NewItem};
use crate::error::ApiError;
use crate::form::ItemForm;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum SaveStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

/// A save that has been started and whose result is still pending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    session: u64,
    pub payload: NewItem,
}

/// How a finished save was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Item created; the modal closed and the form reset
    Saved,
    /// Error shown; the modal stays open with the draft intact
    Failed,
    /// The modal was closed or reopened meanwhile; result ignored
    Stale,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemEditor {
    visible: bool,
    session: u64,
    form: ItemForm,
    status: SaveStatus,
}

impl ItemEditor {
    pub fn new(container: Option<ContainerRef>) -> Self {
        Self {
            form: ItemForm::new(container),
            ..Default::default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SaveStatus::Submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SaveStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Show the modal with a fresh draft
    pub fn open(&mut self, container: Option<ContainerRef>) {
        self.session += 1;
        self.visible = true;
        self.status = SaveStatus::Idle;
        self.form = ItemForm::new(container);
    }

    /// Hide and reset. No confirmation, whatever was typed.
    pub fn close(&mut self) {
        if self.status == SaveStatus::Submitting {
            log::info!("[editor] closing with a save in flight; its result will be ignored");
        }
        self.session += 1;
        self.visible = false;
        self.status = SaveStatus::Idle;
        self.form.reset();
    }

    /// The browsed container changed
    pub fn set_container(&mut self, container: Option<ContainerRef>) {
        self.form.set_container(container);
    }

    /// Start a save. `None` if hidden or a save is already running.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if !self.visible || self.is_submitting() {
            return None;
        }
        self.status = SaveStatus::Submitting;
        Some(SaveTicket {
            session: self.session,
            payload: self.form.payload(),
        })
    }

    pub fn finish_save(&mut self, ticket: &SaveTicket, result: Result<(), ApiError>) -> SaveOutcome {
        if ticket.session != self.session || !self.is_submitting() {
            return SaveOutcome::Stale;
        }
        match result {
            Ok(()) => {
                self.close();
                SaveOutcome::Saved
            }
            Err(e) => {
                self.status = SaveStatus::Failed(e.to_string());
                SaveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PARENT_FIELD;
    use crate::selection::SelectionChange;

    fn opened() -> ItemEditor {
        let mut editor = ItemEditor::new(None);
        editor.open(Some(ContainerRef::new(7, "Shelf A")));
        editor
    }

    #[test]
    fn test_starts_hidden() {
        let mut editor = ItemEditor::new(Some(ContainerRef::new(7, "Shelf A")));
        assert!(!editor.is_visible());
        assert!(editor.begin_save().is_none());
    }

    #[test]
    fn test_open_applies_default_parent() {
        let editor = opened();
        assert!(editor.is_visible());
        assert_eq!(editor.form().draft().parent, Some(7));
        assert_eq!(editor.status, SaveStatus::Idle);
    }

    #[test]
    fn test_successful_save_closes_and_resets() {
        let mut editor = opened();
        editor.form_mut().change_field("name", "Widget").unwrap();
        editor.form_mut().change_field("quantity", "3").unwrap();

        let ticket = editor.begin_save().unwrap();
        assert!(editor.is_submitting());
        assert_eq!(ticket.payload.name, "Widget");

        assert_eq!(editor.finish_save(&ticket, Ok(())), SaveOutcome::Saved);
        assert!(!editor.is_visible());
        assert_eq!(editor.error_message(), None);
        assert_eq!(editor.form().draft().name, "");
        assert_eq!(editor.form().draft().quantity, 0);
    }

    #[test]
    fn test_failed_save_keeps_draft_and_shows_error() {
        let mut editor = opened();
        editor.form_mut().change_field("name", "Widget").unwrap();
        editor.form_mut().change_container(SelectionChange {
            name: PARENT_FIELD.to_string(),
            option: None,
        });

        let ticket = editor.begin_save().unwrap();
        let outcome = editor.finish_save(
            &ticket,
            Err(ApiError::Rejected { status: 400, body: String::new() }),
        );
        assert_eq!(outcome, SaveOutcome::Failed);
        assert!(editor.is_visible());
        assert_eq!(editor.error_message(), Some("Request failed with status code 400"));
        assert_eq!(editor.form().draft().name, "Widget");
        assert_eq!(editor.form().draft().parent, None);

        // Retry with the same draft, then succeed
        let retry = editor.begin_save().unwrap();
        assert_eq!(retry.payload, ticket.payload);
        assert_eq!(editor.error_message(), None);
        assert_eq!(editor.finish_save(&retry, Ok(())), SaveOutcome::Saved);
    }

    #[test]
    fn test_double_save_is_ignored() {
        let mut editor = opened();
        assert!(editor.begin_save().is_some());
        assert!(editor.begin_save().is_none());
    }

    #[test]
    fn test_cancel_discards_partial_input() {
        let mut editor = opened();
        editor.form_mut().change_field("name", "Half typed").unwrap();
        editor.form_mut().change_field("alert_quantity", "9").unwrap();

        editor.close();
        assert!(!editor.is_visible());
        assert_eq!(editor.form().draft().name, "");
        assert_eq!(editor.form().draft().alert_quantity, 0);
    }

    #[test]
    fn test_cancel_after_failure_clears_error() {
        let mut editor = opened();
        let ticket = editor.begin_save().unwrap();
        editor.finish_save(&ticket, Err(ApiError::MissingCsrfToken));
        editor.close();
        assert_eq!(editor.error_message(), None);

        editor.open(None);
        assert_eq!(editor.status, SaveStatus::Idle);
    }

    #[test]
    fn test_result_after_close_is_stale() {
        let mut editor = opened();
        let ticket = editor.begin_save().unwrap();
        editor.close();
        editor.open(Some(ContainerRef::new(8, "Shelf B")));

        assert_eq!(editor.finish_save(&ticket, Ok(())), SaveOutcome::Stale);
        assert!(editor.is_visible());
        assert_eq!(editor.form().draft().parent, Some(8));
    }
}

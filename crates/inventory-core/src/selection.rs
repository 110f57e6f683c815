//! Container Picker State
//!
//! Single-select typeahead over [`RemoteSearch`] with a controlled default.
//! The default is shown until the user first types into the input; after
//! that the picker only shows what the user picked.

use crate::domain::{ContainerRef, SearchResult};
use crate::error::ApiError;
use crate::search::{RemoteSearch, SearchTicket};

/// Notification sent to the owning form when the picked container changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub name: String,
    pub option: Option<SearchResult>,
}

/// What the input should show after a keystroke
#[derive(Debug, Default)]
pub struct InputOutcome {
    /// Query to send once the debounce window passes
    pub ticket: Option<SearchTicket>,
    /// Set on the first keystroke and whenever typing cleared a displayed selection
    pub change: Option<SelectionChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerPicker {
    name: String,
    default: Option<ContainerRef>,
    was_changed: bool,
    selected: Option<SearchResult>,
    query: String,
    search: RemoteSearch,
}

impl ContainerPicker {
    pub fn new(name: impl Into<String>, default: Option<ContainerRef>) -> Self {
        Self::with_search(name, default, RemoteSearch::default())
    }

    pub fn with_search(
        name: impl Into<String>,
        default: Option<ContainerRef>,
        search: RemoteSearch,
    ) -> Self {
        Self {
            name: name.into(),
            default,
            was_changed: false,
            selected: None,
            query: String::new(),
            search,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn was_changed(&self) -> bool {
        self.was_changed
    }

    pub fn search(&self) -> &RemoteSearch {
        &self.search
    }

    pub fn selected(&self) -> Option<&SearchResult> {
        self.selected.as_ref()
    }

    /// The container currently shown as chosen, if any
    pub fn display_label(&self) -> Option<&str> {
        if self.was_changed {
            self.selected.as_ref().map(|s| s.name.as_str())
        } else {
            self.default.as_ref().map(|d| d.name.as_str())
        }
    }

    /// Text for the input box
    pub fn input_text(&self) -> &str {
        if self.was_changed {
            &self.query
        } else {
            self.display_label().unwrap_or("")
        }
    }

    /// Whether the option list should be visible
    pub fn menu_open(&self) -> bool {
        self.was_changed && self.selected.is_none() && self.search.accepts(&self.query)
    }

    /// Replace the container shown while the user has not typed yet
    pub fn set_default(&mut self, default: Option<ContainerRef>) {
        self.default = default;
    }

    /// The user typed into the input
    ///
    /// The first keystroke always reports a change, even with nothing shown,
    /// so the owner knows the field now belongs to the user.
    pub fn on_input(&mut self, query: &str) -> InputOutcome {
        let first_touch = !self.was_changed;
        let had_selection = self.display_label().is_some();
        self.was_changed = true;
        self.selected = None;
        self.query = query.to_string();

        InputOutcome {
            ticket: self.search.begin(query),
            change: (first_touch || had_selection).then(|| self.change()),
        }
    }

    /// The user picked results from the menu; at most the first one is kept
    pub fn select(&mut self, chosen: Vec<SearchResult>) -> SelectionChange {
        self.was_changed = true;
        self.selected = chosen.into_iter().next();
        if let Some(selected) = &self.selected {
            self.query = selected.name.clone();
        }
        self.search.cancel();
        self.change()
    }

    /// Clear the selection without typing (e.g. a clear button)
    pub fn clear(&mut self) -> SelectionChange {
        self.query.clear();
        self.select(Vec::new())
    }

    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<SearchResult>, ApiError>,
    ) -> bool {
        self.search.complete(ticket, result)
    }

    fn change(&self) -> SelectionChange {
        SelectionChange {
            name: self.name.clone(),
            option: self.selected.clone(),
        }
    }
}

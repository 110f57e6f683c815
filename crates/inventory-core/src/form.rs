//! Item Form State
//!
//! Owns the draft [`NewItem`] while the creation modal is open.
//!
//! The parent field follows the browsed container until the user touches the
//! parent picker. From then on only the picker writes it, even when it is
//! cleared to `None`.

use std::str::FromStr;

use crate::domain::{ContainerRef, NewItem};
use crate::error::FieldError;
use crate::selection::SelectionChange;

/// Form field written by the generic text/number handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    AlertQuantity,
    Description,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::Name,
        ItemField::Quantity,
        ItemField::AlertQuantity,
        ItemField::Description,
    ];

    /// Element id and payload key
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Quantity => "quantity",
            ItemField::AlertQuantity => "alert_quantity",
            ItemField::Description => "description",
        }
    }
}

impl FromStr for ItemField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Name of the parent picker as reported in [`SelectionChange::name`]
pub const PARENT_FIELD: &str = "parent";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemForm {
    draft: NewItem,
    container: Option<ContainerRef>,
    parent_touched: bool,
}

impl ItemForm {
    pub fn new(container: Option<ContainerRef>) -> Self {
        let mut form = Self {
            draft: NewItem::default(),
            container,
            parent_touched: false,
        };
        form.sync_parent_default();
        form
    }

    pub fn draft(&self) -> &NewItem {
        &self.draft
    }

    pub fn container(&self) -> Option<&ContainerRef> {
        self.container.as_ref()
    }

    pub fn parent_touched(&self) -> bool {
        self.parent_touched
    }

    /// The payload sent on save
    pub fn payload(&self) -> NewItem {
        self.draft.clone()
    }

    /// Generic change handler keyed by the input's id
    pub fn change_field(&mut self, field_id: &str, raw: &str) -> Result<(), FieldError> {
        let field: ItemField = field_id.parse()?;
        self.set(field, raw)
    }

    pub fn set(&mut self, field: ItemField, raw: &str) -> Result<(), FieldError> {
        match field {
            ItemField::Name => self.draft.name = raw.to_string(),
            ItemField::Description => self.draft.description = raw.to_string(),
            ItemField::Quantity => self.draft.quantity = parse_quantity(field, raw)?,
            ItemField::AlertQuantity => self.draft.alert_quantity = parse_quantity(field, raw)?,
        }
        Ok(())
    }

    /// Change handler for the parent picker
    pub fn change_container(&mut self, change: SelectionChange) {
        if change.name != PARENT_FIELD {
            log::warn!("[form] ignoring container change for field {:?}", change.name);
            return;
        }
        self.parent_touched = true;
        self.draft.parent = change.option.map(|o| o.id);
    }

    /// The browsed container changed while the form is open
    pub fn set_container(&mut self, container: Option<ContainerRef>) {
        self.container = container;
        self.sync_parent_default();
    }

    /// Back to an empty draft, keeping the ambient container
    pub fn reset(&mut self) {
        self.draft = NewItem::default();
        self.parent_touched = false;
        self.sync_parent_default();
    }

    fn sync_parent_default(&mut self) {
        if !self.parent_touched {
            self.draft.parent = self.container.as_ref().map(|c| c.id);
        }
    }
}

fn parse_quantity(field: ItemField, raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| FieldError::InvalidQuantity {
        field: field.as_str(),
        value: raw.to_string(),
    })
}

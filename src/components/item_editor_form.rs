//! Item Editor Form Component
//!
//! Fields of the create-item modal. Text and number inputs share one handler
//! keyed by element id; the parent field goes through [`ContainerSearch`].

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use inventory_core::{ItemEditor, ItemField, SelectionChange, PARENT_FIELD};

use crate::components::ContainerSearch;

/// Id and current value of the input or textarea that fired `ev`
fn field_target(ev: &web_sys::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some((input.id(), input.value()));
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| (area.id(), area.value()))
}

#[component]
pub fn ItemEditorForm(editor: RwSignal<ItemEditor>) -> impl IntoView {
    // Inputs are uncontrolled: seeded once per open, then they own their text.
    let draft = editor.with_untracked(|e| e.form().draft().clone());
    // The picker keeps following the browsed container until the user types
    let default_container = Memo::new(move |_| editor.with(|e| e.form().container().cloned()));

    let on_field_input = move |ev: web_sys::Event| {
        let Some((field_id, value)) = field_target(&ev) else {
            return;
        };
        if let Some(Err(e)) = editor.try_update(|e| e.form_mut().change_field(&field_id, &value)) {
            log::warn!("[form] {}", e);
        }
    };

    let on_container_change = move |change: SelectionChange| {
        editor.update(|e| e.form_mut().change_container(change));
    };

    view! {
        <form class="item-editor-form" on:submit=|ev| ev.prevent_default()>
            <div class="form-row">
                <div class="form-group col">
                    <label for=ItemField::Name.as_str()>"Name"</label>
                    <input
                        type="text"
                        class="form-control"
                        id=ItemField::Name.as_str()
                        value=draft.name
                        on:input=on_field_input
                    />
                </div>
                <div class="form-group col">
                    <label for=PARENT_FIELD>"Parent"</label>
                    <ContainerSearch
                        name=PARENT_FIELD
                        default_value=default_container
                        on_change=on_container_change
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group col">
                    <label for=ItemField::Quantity.as_str()>"Quantity"</label>
                    <input
                        type="number"
                        min="0"
                        class="form-control"
                        id=ItemField::Quantity.as_str()
                        value=draft.quantity.to_string()
                        on:input=on_field_input
                    />
                </div>
                <div class="form-group col">
                    <label for=ItemField::AlertQuantity.as_str()>"Alert Quantity"</label>
                    <input
                        type="number"
                        min="0"
                        class="form-control"
                        id=ItemField::AlertQuantity.as_str()
                        value=draft.alert_quantity.to_string()
                        on:input=on_field_input
                    />
                </div>
            </div>

            // Not submitted yet; the create endpoint takes JSON only
            <div class="form-group">
                <label for="image">"Image"</label>
                <input type="file" class="form-control-file" id="image" accept="image/*"/>
            </div>

            <div class="form-group">
                <label for=ItemField::Description.as_str()>"Description"</label>
                <textarea
                    class="form-control"
                    id=ItemField::Description.as_str()
                    on:input=on_field_input
                >
                    {draft.description}
                </textarea>
            </div>
        </form>
    }
}

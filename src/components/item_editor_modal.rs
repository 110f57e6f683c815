//! Item Editor Modal Component
//!
//! "Create new item" dialog: hosts the form, runs the save, and resets on close.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{submit_item, ItemEditor, SaveOutcome};

use crate::components::ItemEditorForm;
use crate::context::use_app_context;

/// Modal for creating items
///
/// # Arguments
/// * `editor` - modal + draft state; the host opens it with `ItemEditor::open`
/// * `on_saved` - called after an item was created
/// * `on_close` - called whenever the modal hides (cancel, close button, or save)
#[component]
pub fn ItemEditorModal(
    editor: RwSignal<ItemEditor>,
    #[prop(optional, into)] on_saved: Option<Callback<()>>,
    #[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let handle_close = move || {
        editor.update(|e| e.close());
        if let Some(cb) = on_close {
            cb.run(());
        }
    };

    let handle_save = move || {
        let Some(ticket) = editor.try_update(|e| e.begin_save()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = submit_item(&api, &ticket.payload).await;
            if let Err(e) = &result {
                log::error!("[editor] save failed: {}", e);
            }
            match editor.try_update(|e| e.finish_save(&ticket, result)) {
                Some(SaveOutcome::Saved) => {
                    if let Some(cb) = on_saved {
                        cb.run(());
                    }
                    if let Some(cb) = on_close {
                        cb.run(());
                    }
                }
                Some(SaveOutcome::Stale) | None => {
                    log::debug!("[editor] modal closed before save finished; result dropped");
                }
                Some(SaveOutcome::Failed) => {}
            }
        });
    };

    let is_submitting = move || editor.with(|e| e.is_submitting());

    view! {
        <Show when=move || editor.with(|e| e.is_visible())>
            <div class="modal-backdrop" on:click=move |_| handle_close()>
                <div class="modal-dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h5 class="modal-title">"Create new item"</h5>
                        <button type="button" class="close" aria-label="Close" on:click=move |_| handle_close()>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        <ItemEditorForm editor=editor />
                    </div>
                    <div class="modal-footer">
                        <p class="text-danger">
                            {move || editor.with(|e| e.error_message().map(str::to_string))}
                        </p>
                        <button type="button" class="btn btn-secondary" on:click=move |_| handle_close()>
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=is_submitting
                            on:click=move |_| handle_save()
                        >
                            {move || if is_submitting() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

//! Inventory Browser App
//!
//! Browse page: contents of the container named by the path, plus the
//! create-item modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use inventory_core::{InventoryApi, ItemEditor};

use crate::components::{ContentsTable, ItemEditorModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{
    parse_browse_path, store_begin_load, store_set_contents, store_set_error, BrowseState,
    BrowseStateStoreFields,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(ctx);

    let path = window().location().pathname().unwrap_or_default();
    let store = Store::new(BrowseState::new(parse_browse_path(&path)));
    let editor = RwSignal::new(ItemEditor::new(None));

    // Load the browsed container and its contents on mount and on reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let container_id = store.container_id().get_untracked();
        let known = store.container().get_untracked().is_some();
        log::debug!("[app] loading contents of {:?}, trigger={}", container_id, trigger);
        store_begin_load(&store);

        let api = ctx.api();
        spawn_local(async move {
            if let (Some(id), false) = (container_id, known) {
                match api.get_container(id).await {
                    Ok(container) => *store.container().write() = Some(container.to_container_ref()),
                    Err(e) => log::warn!("[app] could not load container {}: {}", id, e),
                }
            }
            match api.get_contents(container_id).await {
                Ok(contents) => {
                    log::info!(
                        "[app] Loaded {} containers, {} items",
                        contents.containers.len(),
                        contents.items.len()
                    );
                    store_set_contents(&store, contents);
                }
                Err(e) => {
                    log::error!("[app] could not load contents: {}", e);
                    store_set_error(&store, e.to_string());
                }
            }
        });
    });

    // Keep the editor's default parent on the browsed container
    Effect::new(move |_| {
        let container = store.container().get();
        editor.update(|e| e.set_container(container));
    });

    let contents = Signal::derive(move || store.contents().get());

    let title = move || {
        store
            .container()
            .get()
            .map(|c| c.name)
            .unwrap_or_else(|| "All containers".to_string())
    };

    view! {
        <div class="browse-layout">
            <header class="browse-header">
                <h1>{title}</h1>
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| {
                        let container = store.container().get_untracked();
                        editor.update(|e| e.open(container));
                    }
                >
                    "New item"
                </button>
            </header>

            <Show when=move || store.loading().get()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || store.error().get().map(|e| view! { <p class="text-danger">{e}</p> })}

            <ContentsTable contents=contents />

            <ItemEditorModal editor=editor on_saved=move |_| ctx.reload() />
        </div>
    }
}

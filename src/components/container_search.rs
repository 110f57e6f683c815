//! Container Search Component
//!
//! Typeahead for picking a parent container, backed by the search endpoint.
//! Requests are debounced; only the newest query may fill the option list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{
    ContainerPicker, ContainerRef, InventoryApi, RemoteSearch, SearchResult, SelectionChange,
};

use crate::context::use_app_context;

/// Single-select container typeahead
///
/// Props:
/// - name: field name reported back in every [`SelectionChange`]; also the input id
/// - default_value: container shown until the user types; followed while untouched
/// - on_change: called when the picked container changes (including to none)
#[component]
pub fn ContainerSearch(
    #[prop(into)] name: String,
    #[prop(into)] default_value: Signal<Option<ContainerRef>>,
    #[prop(into)] on_change: Callback<SelectionChange>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let debounce_ms = config.search_debounce_ms;
    let input_id = name.clone();

    let picker = RwSignal::new(ContainerPicker::with_search(
        name,
        default_value.get_untracked(),
        RemoteSearch::new(config.search_min_length),
    ));

    // The browsed container can resolve after the modal opened
    Effect::new(move |_| {
        let default = default_value.get();
        picker.try_update(|p| p.set_default(default));
    });

    let on_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        let Some(outcome) = picker.try_update(|p| p.on_input(&query)) else {
            return;
        };
        if let Some(change) = outcome.change {
            on_change.run(change);
        }
        let Some(ticket) = outcome.ticket else {
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            // Superseded by a later keystroke, or the picker is gone
            let current = picker
                .try_with_untracked(|p| p.search().is_current(&ticket))
                .unwrap_or(false);
            if !current {
                return;
            }
            let result = ctx.api().search_containers(&ticket.query).await;
            picker.try_update(|p| p.complete_search(&ticket, result));
        });
    };

    let select = move |option: SearchResult| {
        if let Some(change) = picker.try_update(|p| p.select(vec![option])) {
            on_change.run(change);
        }
    };

    let is_loading = move || picker.with(|p| p.search().is_loading());

    view! {
        <div class="container-search">
            <input
                type="text"
                id=input_id
                class="form-control"
                autocomplete="off"
                placeholder="Containers, items, tags..."
                prop:value=move || picker.with(|p| p.input_text().to_string())
                on:input=on_input
            />
            <Show when=is_loading>
                <span class="search-spinner">"Searching..."</span>
            </Show>

            <Show when=move || picker.with(|p| p.menu_open())>
                <div class="autocomplete-list">
                    {move || {
                        let options = picker.with(|p| p.search().options().to_vec());
                        if options.is_empty() {
                            if is_loading() {
                                view! { <div></div> }.into_any()
                            } else {
                                view! { <div class="autocomplete-empty">"No matches found."</div> }.into_any()
                            }
                        } else {
                            options.into_iter().map(|option| {
                                let label = option.to_string();
                                view! {
                                    <button
                                        type="button"
                                        class="autocomplete-item"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            select(option.clone());
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

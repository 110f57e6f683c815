//! Contents Table Component
//!
//! Read-only listing of a container's child containers and items.

use leptos::prelude::*;

use inventory_core::{contents_rows, ContainerContents, ContentsRow, RowKind, EMPTY_MESSAGE};

#[component]
pub fn ContentsTable(#[prop(into)] contents: Signal<Option<ContainerContents>>) -> impl IntoView {
    let rows = move || contents.with(|c| contents_rows(c.as_ref()));
    let is_empty = move || contents.with(|c| c.as_ref().map_or(true, ContainerContents::is_empty));

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Location"</th>
                    <th>"Description"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <tr>
                            <td colspan="5"><p class="text-muted">{EMPTY_MESSAGE}</p></td>
                        </tr>
                    }
                >
                    <For
                        each=rows
                        key=|row| row.key.clone()
                        children=contents_row
                    />
                </Show>
            </tbody>
        </table>
    }
}

fn contents_row(row: ContentsRow) -> impl IntoView {
    let name_cell = match row.link {
        Some(href) => view! { <a href=href>{row.label.clone()}</a> }.into_any(),
        None => view! { <span>{row.label.clone()}</span> }.into_any(),
    };

    view! {
        <tr class:container-row=row.kind == RowKind::Container class:low-stock=row.low_stock>
            <td>{name_cell}</td>
            <td>{row.type_label}</td>
            <td>{row.location}</td>
            <td>{row.description}</td>
            <td>
                <div class="btn-toolbar">
                    <button type="button" class="btn btn-sm btn-success" title="Edit">"✎"</button>
                    <button type="button" class="btn btn-sm btn-danger" title="Delete">"×"</button>
                </div>
            </td>
        </tr>
    }
}

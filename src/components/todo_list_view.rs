//! Todo List View Component
//!
//! Rebuilds every row from the store on each change (no keyed diffing) and routes
//! row button clicks through one delegated listener.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::ItemId;
use crate::render::{project, ListView};
use crate::store::AppStateStoreFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(ItemId),
    Delete(ItemId),
}

/// Decode a row button's `data-action` / `data-id` pair
pub fn parse_row_action(action: &str, id: &str) -> Option<RowAction> {
    let id = id.trim().parse::<ItemId>().ok()?;
    match action {
        "edit" => Some(RowAction::Edit(id)),
        "delete" => Some(RowAction::Delete(id)),
        _ => None,
    }
}

fn delegated_action(ev: &web_sys::MouseEvent) -> Option<RowAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-action]").ok()??;
    parse_row_action(&button.get_attribute("data-action")?, &button.get_attribute("data-id")?)
}

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| match delegated_action(&ev) {
        Some(RowAction::Edit(id)) => {
            if let Err(err) = actions::open_edit(&ctx, id) {
                log::debug!("edit dialog not opened: {}", err);
            }
        }
        Some(RowAction::Delete(id)) => {
            let api = ctx.api();
            spawn_local(async move {
                if let Err(err) = actions::delete_item(&ctx, &api, id).await {
                    log::debug!("delete {} ended with: {}", id, err);
                }
            });
        }
        None => {}
    };

    view! {
        <div id="todoList" class="todo-list" on:click=on_click>
            {move || match ctx.store.todos().with(|todos| project(todos)) {
                ListView::Empty(text) => view! {
                    <p class="list-placeholder">{text}</p>
                }.into_any(),
                ListView::LoadFailed(message) => view! {
                    <p class="list-error">{message}</p>
                }.into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <TodoRow row=row /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_action() {
        assert_eq!(parse_row_action("edit", "7"), Some(RowAction::Edit(7)));
        assert_eq!(parse_row_action("delete", " 101 "), Some(RowAction::Delete(101)));
        assert_eq!(parse_row_action("delete", "abc"), None);
        assert_eq!(parse_row_action("archive", "1"), None);
    }
}

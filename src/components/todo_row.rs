//! Todo Row Component
//!
//! One item in the list. Buttons only carry `data-action`/`data-id`; clicks are
//! handled by the list container.

use leptos::prelude::*;

use crate::components::BusyButton;
use crate::context::use_app_context;
use crate::models::Control;
use crate::render::RowView;

#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let body_class = if row.has_body { "item-body" } else { "item-body empty" };
    let deleting = Signal::derive(move || ctx.is_busy(Control::Delete(id)));

    view! {
        <div id=row.dom_id class="item-row">
            <div class="item-text">
                <h3 class="item-title">{row.title}</h3>
                <p class=body_class>{row.body}</p>
            </div>
            <div class="item-actions">
                <button class="edit-btn" data-action="edit" data-id=id.to_string()>
                    <i class="fas fa-edit ml-2"></i>
                    " Edit"
                </button>
                <BusyButton
                    label="Delete"
                    busy=deleting
                    class="delete-btn"
                    data_action="delete"
                    data_id=id.to_string()
                />
            </div>
        </div>
    }
}

//! Edit Dialog Component
//!
//! Pre-filled form for the item in `AppState::editing`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{BusyButton, ModalFrame};
use crate::context::use_app_context;
use crate::models::{Control, ItemDraft};

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.edit_form;
    let saving = Signal::derive(move || ctx.is_busy(Control::EditSave));

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(id) = ctx.editing() else {
            log::warn!("edit submitted with no target item");
            return;
        };
        let draft = ItemDraft::from_input(&form.title.get_untracked(), &form.body.get_untracked());
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = actions::submit_edit(&ctx, &api, id, draft).await {
                log::debug!("edit of {} ended with: {}", id, err);
            }
        });
    };

    view! {
        <ModalFrame id="editModal" title="Edit task" controller=ctx.edit_modal>
            <form id="editTodoForm" class="modal-form" on:submit=save>
                <label class="form-label" for="editTitle">"Title"</label>
                <input
                    id="editTitle"
                    type="text"
                    class="form-input"
                    prop:value=move || form.title.get()
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                />
                <label class="form-label" for="editBody">"Description"</label>
                <textarea
                    id="editBody"
                    class="form-input"
                    rows="4"
                    prop:value=move || form.body.get()
                    on:input=move |ev| form.body.set(event_target_value(&ev))
                ></textarea>
                <div class="modal-actions">
                    <button
                        id="cancelEdit"
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| ctx.edit_modal.close()
                    >
                        "Cancel"
                    </button>
                    <BusyButton
                        label="Save changes"
                        busy=saving
                        button_type="submit"
                        class="primary-btn"
                    />
                </div>
            </form>
        </ModalFrame>
    }
}

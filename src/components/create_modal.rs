//! Create Dialog Component
//!
//! Form for adding a new item: required title, optional body.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{BusyButton, ModalFrame};
use crate::context::use_app_context;
use crate::models::{Control, ItemDraft};

#[component]
pub fn CreateModal() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.create_form;
    let submitting = Signal::derive(move || ctx.is_busy(Control::CreateSubmit));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ItemDraft::from_input(&form.title.get_untracked(), &form.body.get_untracked());
        let api = ctx.api();
        spawn_local(async move {
            if let Err(err) = actions::submit_create(&ctx, &api, draft).await {
                log::debug!("create ended with: {}", err);
            }
        });
    };

    view! {
        <ModalFrame id="addModal" title="Add a new task" controller=ctx.create_modal>
            <form id="todoForm" class="modal-form" on:submit=submit>
                <label class="form-label" for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    class="form-input"
                    placeholder="What needs doing?"
                    prop:value=move || form.title.get()
                    on:input=move |ev| form.title.set(event_target_value(&ev))
                />
                <label class="form-label" for="body">"Description (optional)"</label>
                <textarea
                    id="body"
                    class="form-input"
                    rows="4"
                    prop:value=move || form.body.get()
                    on:input=move |ev| form.body.set(event_target_value(&ev))
                ></textarea>
                <div class="modal-actions">
                    <BusyButton
                        label="Add task"
                        busy=submitting
                        button_type="submit"
                        class="primary-btn"
                    />
                </div>
            </form>
        </ModalFrame>
    }
}

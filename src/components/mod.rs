//! UI Components
//!
//! Leptos components for the list page.

mod busy_button;
mod create_modal;
mod edit_modal;
mod header;
mod modal_frame;
mod toast_host;
mod todo_list_view;
mod todo_row;

pub use busy_button::BusyButton;
pub use create_modal::CreateModal;
pub use edit_modal::EditModal;
pub use header::Header;
pub use modal_frame::ModalFrame;
pub use toast_host::ToastHost;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;

//! Todo Board Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod modal;
mod models;
mod notify;
mod render;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_env();
    // Only fails when a logger is already installed.
    let _ = ring_logger::init(config.log_level, config.log_capacity);
    log::info!("todo-board starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}

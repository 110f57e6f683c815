//! Inventory Browser Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init(config.log_filter());
    log::info!("[app] starting; API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

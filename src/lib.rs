use wasm_bindgen::prelude::*;

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

use crate::domain::logging::{LogComponent, get_logger, init_logger, init_time_provider};

/// Wire up logging and mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    init_logger(Box::new(infrastructure::services::ConsoleLogger::new_development()));
    init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Coin Watch dashboard starting");

    leptos::mount_to_body(app::App);
}

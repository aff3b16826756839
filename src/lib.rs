use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::DashboardConfig;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// Boot the dashboard: logging, page config, then mount the Leptos app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    let loaded = infrastructure::load_page_config();
    let config = loaded.clone().unwrap_or_default();
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new(config.log_level)));
    if let Err(e) = loaded {
        log_warn!(LogComponent::Presentation("Initialize"), "using default config: {}", e);
    }

    apply_page_metadata(&config);

    log_info!(LogComponent::Presentation("Initialize"), "mounting '{}'", config.page_title);
    mount_to_body(move || view! { <App config=config /> });
}

/// Document title and an emoji favicon, like a hosted dashboard page would set.
fn apply_page_metadata(config: &DashboardConfig) {
    let document = gloo::utils::document();
    document.set_title(&config.page_title);

    let icon = format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        config.page_icon
    );
    let installed = document
        .create_element("link")
        .and_then(|link| {
            link.set_attribute("rel", "icon")?;
            link.set_attribute("href", &icon)?;
            Ok(link)
        })
        .ok()
        .zip(document.head())
        .map(|(link, head)| head.append_child(&link).is_ok())
        .unwrap_or(false);
    if !installed {
        log_debug!(LogComponent::Presentation("Initialize"), "favicon not installed");
    }
}

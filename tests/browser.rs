#![cfg(target_arch = "wasm32")]

use solar_dashboard_wasm::application::build_annotations;
use solar_dashboard_wasm::domain::chart::{ChartBackend, PixelOffset};
use solar_dashboard_wasm::domain::errors::AppError;
use solar_dashboard_wasm::domain::logging::TimeProvider;
use solar_dashboard_wasm::domain::session::{AuthState, Destination, StaticCredentials};
use solar_dashboard_wasm::infrastructure::{BrowserTimeProvider, VegaEmbedBackend, load_page_config};
use solar_dashboard_wasm::presentation::SessionContext;
use leptos::SignalGetUntracked;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider::new();
    let label = clock.format_timestamp(clock.current_timestamp());
    assert_eq!(label.len(), "00:00:00.000".len());
    assert_eq!(label.matches(':').count(), 2);
}

#[wasm_bindgen_test]
fn missing_config_element_means_defaults() {
    let config = load_page_config().unwrap();
    assert_eq!(config.chart_title, "Demo");
}

#[wasm_bindgen_test]
fn render_into_missing_container_fails() {
    let chart = build_annotations("X", PixelOffset::new(0), PixelOffset::new(0)).unwrap();
    let backend = VegaEmbedBackend::new();
    assert_eq!(backend.name(), "vega-embed");
    match backend.render("no-such-element", &chart) {
        Err(AppError::Rendering(msg)) => assert!(msg.contains("no-such-element")),
        other => panic!("expected rendering error, got {:?}", other),
    }
}

#[wasm_bindgen_test]
fn session_context_round_trip() {
    let ctx = SessionContext::new(Rc::new(StaticCredentials::default()));
    assert!(!ctx.attempt_login("Panel", "nope"));
    assert_eq!(ctx.state(), AuthState::LoggedOut);

    assert!(ctx.attempt_login("Panel", "123456"));
    assert!(ctx.is_authenticated());

    ctx.select(Destination::Chart);
    assert_eq!(ctx.destination.get_untracked(), Destination::Chart);

    ctx.select(Destination::LogOut);
    assert_eq!(ctx.state(), AuthState::LoggedOut);
    assert_eq!(ctx.destination.get_untracked(), Destination::Home);
}

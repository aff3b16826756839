use solar_dashboard_wasm::config::DashboardConfig;
use solar_dashboard_wasm::domain::chart::{ChartControls, PixelOffset};
use solar_dashboard_wasm::domain::errors::AppError;
use solar_dashboard_wasm::domain::logging::LogLevel;
use solar_dashboard_wasm::domain::market_data::TradingDate;
use std::str::FromStr;

#[test]
fn defaults_match_the_dashboard() {
    let config = DashboardConfig::default();
    assert_eq!(config.page_title, "Solar Battery Data Analysis");
    assert_eq!(config.page_icon, "⬇");
    assert_eq!(config.chart_title, "Demo");
    assert_eq!(config.chart_height, 500);
    assert_eq!(config.series_cutoff, TradingDate::from_ymd(2004, 1, 1).unwrap());
    assert_eq!(config.chart_cache_ttl_ms(), 86_400_000);
    assert_eq!(config.initial_controls(), ChartControls::default());
}

#[test]
fn empty_document_is_all_defaults() {
    assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
}

#[test]
fn partial_overrides() {
    let config = DashboardConfig::from_json(
        r#"{ "series_cutoff": "2007-06-01", "log_level": "warn", "default_dx": 99, "chart_cache_ttl_hours": 1 }"#,
    )
    .unwrap();
    assert_eq!(config.series_cutoff, TradingDate::from_ymd(2007, 6, 1).unwrap());
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.initial_controls().dx, PixelOffset::new(30));
    assert_eq!(config.chart_cache_ttl_ms(), 3_600_000);
    assert_eq!(config.chart_title, "Demo");
}

#[test]
fn oversized_cache_ttl_saturates() {
    let config = DashboardConfig::from_json(r#"{ "chart_cache_ttl_hours": 18446744073709551615 }"#).unwrap();
    assert_eq!(config.chart_cache_ttl_hours, u64::MAX);
    assert_eq!(config.chart_cache_ttl_ms(), u64::MAX);
}

#[test]
fn malformed_json_is_a_configuration_error() {
    assert!(matches!(DashboardConfig::from_json("{ nope"), Err(AppError::Configuration(_))));
    assert!(matches!(
        DashboardConfig::from_json(r#"{ "chart_height": "tall" }"#),
        Err(AppError::Configuration(_))
    ));
}

#[test]
fn log_levels_parse_case_insensitively() {
    assert_eq!(LogLevel::from_str("INFO"), Ok(LogLevel::Info));
    assert!(LogLevel::Debug < LogLevel::Error);
}

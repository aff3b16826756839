use serde::Deserialize;

use crate::domain::chart::{ChartControls, PixelOffset};
use crate::domain::errors::DashboardResult;
use crate::domain::logging::LogLevel;
use crate::domain::market_data::TradingDate;
use crate::time_utils;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Page-level settings. Every field has a default, so a config document only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_title: String,
    pub page_icon: String,
    pub chart_title: String,
    pub chart_height: u32,
    /// Rows on or before this date are dropped from the chart.
    pub series_cutoff: TradingDate,
    pub chart_cache_ttl_hours: u64,
    pub default_ticker: String,
    pub default_dx: i32,
    pub default_dy: i32,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Solar Battery Data Analysis".to_string(),
            page_icon: "⬇".to_string(),
            chart_title: "Demo".to_string(),
            chart_height: 500,
            series_cutoff: TradingDate::from_ymd(2004, 1, 1).unwrap_or_default(),
            chart_cache_ttl_hours: 24,
            default_ticker: ChartControls::DEFAULT_TICKER.to_string(),
            default_dx: 0,
            default_dy: -10,
            log_level: LogLevel::Debug,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn chart_cache_ttl_ms(&self) -> u64 {
        time_utils::hours_to_millis(self.chart_cache_ttl_hours)
    }

    /// Initial control values; offsets are clamped into the slider range.
    pub fn initial_controls(&self) -> ChartControls {
        ChartControls {
            ticker: self.default_ticker.clone(),
            dx: PixelOffset::new(self.default_dx),
            dy: PixelOffset::new(self.default_dy),
        }
    }
}

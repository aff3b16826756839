use std::sync::Arc;

use crate::log_debug;
use crate::{
    application::use_cases::{BuildChartUseCase, ChartStyle, LoadPriceSeriesUseCase},
    config::DashboardConfig,
    domain::{
        chart::{ChartControls, LayeredChart},
        errors::DashboardResult,
        logging::{LogComponent, TimeProvider},
        market_data::{PriceRepository, PriceSeries},
    },
};

/// Application service behind the Chart page: owns both memo stores for the
/// lifetime of the page.
pub struct ChartApplicationService {
    loader: LoadPriceSeriesUseCase<Box<dyn PriceRepository>>,
    builder: BuildChartUseCase,
}

impl ChartApplicationService {
    pub fn new(
        config: &DashboardConfig,
        repository: Box<dyn PriceRepository>,
        clock: Box<dyn TimeProvider>,
    ) -> Self {
        let style = ChartStyle { title: config.chart_title.clone(), height: config.chart_height };
        Self {
            loader: LoadPriceSeriesUseCase::new(repository, config.series_cutoff),
            builder: BuildChartUseCase::new(style, config.chart_cache_ttl_ms(), clock),
        }
    }

    pub fn load_price_series(&mut self) -> DashboardResult<Arc<PriceSeries>> {
        self.loader.execute()
    }

    /// Full chart for the current controls: cached base plus fresh annotations.
    pub fn chart_for(&mut self, controls: &ChartControls) -> DashboardResult<LayeredChart> {
        let series = self.load_price_series()?;
        let chart = self.builder.execute(&series, controls)?;

        log_debug!(
            LogComponent::Application("ChartService"),
            "chart ready: {} layers, ticker '{}', offset ({}, {}), cache hits={} misses={}",
            chart.layers.len(),
            controls.ticker,
            controls.dx,
            controls.dy,
            self.builder.cache_stats().hits,
            self.builder.cache_stats().misses
        );
        Ok(chart)
    }

    pub fn cached_charts(&self) -> usize {
        self.builder.cached_charts()
    }
}

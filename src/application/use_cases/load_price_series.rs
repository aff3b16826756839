use std::sync::Arc;

use crate::application::memo::Memo;
use crate::log_info;
use crate::domain::{
    errors::{AppError, DashboardResult},
    logging::LogComponent,
    market_data::{PriceRepository, PriceSeries, TradingDate},
};

/// Use Case: load the price table once and keep it for the process lifetime.
pub struct LoadPriceSeriesUseCase<R: PriceRepository> {
    repository: R,
    cutoff: TradingDate,
    memo: Memo<(), Arc<PriceSeries>>,
}

impl<R: PriceRepository> LoadPriceSeriesUseCase<R> {
    pub fn new(repository: R, cutoff: TradingDate) -> Self {
        Self { repository, cutoff, memo: Memo::unbounded() }
    }

    /// Rows strictly after the cutoff. Repeated calls return the same `Arc`.
    ///
    /// An empty result is an error: the chart would otherwise render blank
    /// with no hint why.
    pub fn execute(&mut self) -> DashboardResult<Arc<PriceSeries>> {
        let repository = &self.repository;
        let cutoff = self.cutoff;
        // The unbounded memo ignores the clock.
        self.memo.get_or_try_insert_with((), 0, || {
            let all = repository.load_all()?;
            let series = all.after(cutoff);
            if series.is_empty() {
                return Err(AppError::Dataset(format!("no price records after {}", cutoff)));
            }
            log_info!(
                LogComponent::Application("LoadPriceSeries"),
                "loaded {} of {} rows after {} ({} symbols)",
                series.len(),
                all.len(),
                cutoff,
                series.symbols().len()
            );
            Ok(Arc::new(series))
        })
    }
}

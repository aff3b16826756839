use super::entities::PriceSeries;
use crate::domain::errors::DashboardResult;

/// Read-only source of the price table.
pub trait PriceRepository {
    /// Every row the source holds, in source order.
    fn load_all(&self) -> DashboardResult<PriceSeries>;
}

impl<R: PriceRepository + ?Sized> PriceRepository for Box<R> {
    fn load_all(&self) -> DashboardResult<PriceSeries> {
        (**self).load_all()
    }
}

impl<R: PriceRepository + ?Sized> PriceRepository for &R {
    fn load_all(&self) -> DashboardResult<PriceSeries> {
        (**self).load_all()
    }
}

use super::entities::LayeredChart;
use crate::domain::errors::DashboardResult;

/// Anything that can turn a chart description into pixels.
pub trait ChartBackend {
    fn name(&self) -> &'static str;

    /// Draw `chart` into the element with id `container_id`, replacing
    /// whatever was drawn there before.
    fn render(&self, container_id: &str, chart: &LayeredChart) -> DashboardResult<()>;
}

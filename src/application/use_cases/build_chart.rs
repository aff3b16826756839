use std::sync::Arc;

use crate::application::memo::{Memo, MemoStats};
use crate::log_debug;
use crate::domain::{
    chart::{
        ChartControls, ConditionalValue, Dataset, Encoding, FieldEncoding, Filter, Layer,
        LayeredChart, Mark, MarkType, PixelOffset, Selection, TimeUnit, annotation_table,
    },
    errors::{AppError, DashboardResult},
    logging::{LogComponent, TimeProvider},
    market_data::PriceSeries,
};

pub const PRICES_DATASET: &str = "prices";
pub const ANNOTATIONS_DATASET: &str = "annotations";
pub const HOVER_SELECTION: &str = "hover";

const POINT_SIZE: f64 = 65.0;
const ANNOTATION_SIZE: f64 = 15.0;
const RULE_OPACITY_HOVERED: f64 = 0.3;

/// Chart-level presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { title: "Demo".to_string(), height: 500 }
    }
}

/// Lines per symbol, hover points and an invisible tooltip rule.
///
/// Depends only on the series, which is what makes it cacheable.
pub fn build_base_chart(series: Arc<PriceSeries>, style: &ChartStyle) -> LayeredChart {
    let lines = Layer::new(
        PRICES_DATASET,
        Mark::new(MarkType::Line),
        Encoding::xy(
            FieldEncoding::temporal("date").titled("Date"),
            FieldEncoding::quantitative("price").titled("Price"),
        )
        .with_color(FieldEncoding::nominal("symbol")),
    );

    let points = lines
        .remark(Mark::new(MarkType::Circle).with_size(POINT_SIZE))
        .with_filter(Filter::InSelection(HOVER_SELECTION.to_string()));

    let tooltips = Layer::new(
        PRICES_DATASET,
        Mark::new(MarkType::Rule),
        Encoding::xy(
            FieldEncoding::temporal("date").binned(TimeUnit::YearMonthDate),
            FieldEncoding::quantitative("price"),
        )
        .with_opacity(ConditionalValue {
            selection: HOVER_SELECTION.to_string(),
            when_selected: RULE_OPACITY_HOVERED,
            otherwise: 0.0,
        })
        .with_tooltip(vec![
            FieldEncoding::temporal("date").titled("Date"),
            FieldEncoding::quantitative("price").titled("Price (USD)"),
        ]),
    )
    .with_selection(Selection::nearest_hover(HOVER_SELECTION, "date"));

    LayeredChart::new()
        .with_title(style.title.clone())
        .with_height(style.height)
        .with_dataset(PRICES_DATASET, Dataset::Prices(series))
        .with_layer(lines)
        .with_layer(points)
        .with_layer(tooltips)
        .interactive()
}

/// Ticker glyph at each annotated date, nudged by `(dx, dy)` pixels from the
/// y = 0 baseline, with the event text as tooltip. Cheap; never cached.
pub fn build_annotations(ticker: &str, dx: PixelOffset, dy: PixelOffset) -> DashboardResult<LayeredChart> {
    let rows = annotation_table()?;
    let layer = Layer::new(
        ANNOTATIONS_DATASET,
        Mark::text(ticker, dx, dy).with_size(ANNOTATION_SIZE),
        Encoding::xy(FieldEncoding::temporal("date"), FieldEncoding::quantitative("y"))
            .with_tooltip(vec![FieldEncoding::nominal("event")]),
    );

    Ok(LayeredChart::new()
        .with_dataset(ANNOTATIONS_DATASET, Dataset::Annotations(Arc::new(rows)))
        .with_layer(layer)
        .interactive())
}

/// Use Case: compose the cached base chart with a fresh annotation layer.
pub struct BuildChartUseCase {
    style: ChartStyle,
    clock: Box<dyn TimeProvider>,
    memo: Memo<u64, LayeredChart>,
}

impl BuildChartUseCase {
    pub fn new(style: ChartStyle, ttl_ms: u64, clock: Box<dyn TimeProvider>) -> Self {
        Self { style, clock, memo: Memo::with_ttl(ttl_ms) }
    }

    pub fn execute(&mut self, series: &Arc<PriceSeries>, controls: &ChartControls) -> DashboardResult<LayeredChart> {
        let now = self.clock.current_timestamp();
        let style = &self.style;
        let base = self
            .memo
            .get_or_try_insert_with(series.fingerprint(), now, || {
                log_debug!(LogComponent::Application("BuildChart"), "building base chart over {} rows", series.len());
                Ok::<_, AppError>(build_base_chart(Arc::clone(series), style))
            })?;

        let annotations = build_annotations(&controls.ticker, controls.dx, controls.dy)?;
        let chart = base.overlay(annotations).interactive().full_width();
        chart.validate()?;
        Ok(chart)
    }

    pub fn cached_charts(&self) -> usize {
        self.memo.len()
    }

    pub fn cache_stats(&self) -> MemoStats {
        self.memo.stats()
    }
}

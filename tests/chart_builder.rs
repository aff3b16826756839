use solar_dashboard_wasm::application::{
    BuildChartUseCase, ChartStyle, HOVER_SELECTION, LoadPriceSeriesUseCase, PRICES_DATASET,
    build_base_chart,
};
use solar_dashboard_wasm::domain::chart::{
    ChartControls, Dataset, Filter, MarkType, PointerEvent, TimeUnit,
};
use solar_dashboard_wasm::domain::logging::TimeProvider;
use solar_dashboard_wasm::domain::market_data::{PriceSeries, TradingDate};
use solar_dashboard_wasm::infrastructure::CsvPriceRepository;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

const DAY_MS: u64 = 86_400_000;

#[derive(Clone, Default)]
struct FakeClock(Arc<AtomicU64>);

impl FakeClock {
    fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeProvider for FakeClock {
    fn current_timestamp(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        timestamp.to_string()
    }
}

fn series() -> Arc<PriceSeries> {
    let cutoff = TradingDate::from_ymd(2004, 1, 1).unwrap();
    LoadPriceSeriesUseCase::new(CsvPriceRepository::bundled(), cutoff).execute().unwrap()
}

#[test]
fn base_chart_has_lines_points_and_rule() {
    let chart = build_base_chart(series(), &ChartStyle::default());
    assert_eq!(chart.title.as_deref(), Some("Demo"));
    assert_eq!(chart.height, Some(500));
    assert!(chart.interactive);

    let kinds: Vec<MarkType> = chart.layers.iter().map(|l| l.mark.kind).collect();
    assert_eq!(kinds, [MarkType::Line, MarkType::Circle, MarkType::Rule]);

    let lines = &chart.layers[0];
    assert_eq!(lines.encoding.x.as_ref().and_then(|x| x.title.as_deref()), Some("Date"));
    assert_eq!(lines.encoding.y.as_ref().and_then(|y| y.title.as_deref()), Some("Price"));
    assert_eq!(lines.encoding.color.as_ref().map(|c| c.field.as_str()), Some("symbol"));

    let points = &chart.layers[1];
    assert_eq!(points.encoding, lines.encoding);
    assert_eq!(points.mark.size, Some(65.0));
    assert_eq!(points.filters, vec![Filter::InSelection(HOVER_SELECTION.to_string())]);

    let rule = &chart.layers[2];
    assert_eq!(rule.encoding.x.as_ref().and_then(|x| x.time_unit), Some(TimeUnit::YearMonthDate));
    let tooltip_titles: Vec<_> = rule.encoding.tooltip.iter().filter_map(|t| t.title.as_deref()).collect();
    assert_eq!(tooltip_titles, ["Date", "Price (USD)"]);
    let opacity = rule.encoding.opacity.as_ref().unwrap();
    assert_eq!((opacity.when_selected, opacity.otherwise), (0.3, 0.0));

    let hover = &rule.selections[0];
    assert_eq!(hover.fields, ["date"]);
    assert!(hover.nearest);
    assert_eq!(hover.on, PointerEvent::MouseOver);
    assert!(!hover.empty_selects_all);
}

#[test]
fn full_chart_overlays_annotations() {
    let series = series();
    let mut builder = BuildChartUseCase::new(ChartStyle::default(), DAY_MS, Box::new(FakeClock::default()));
    let chart = builder.execute(&series, &ChartControls::default()).unwrap();

    assert_eq!(chart.layers.len(), 4);
    assert_eq!(chart.layers[3].mark.kind, MarkType::Text);
    assert!(chart.full_width && chart.interactive);
    match chart.dataset(PRICES_DATASET) {
        Some(Dataset::Prices(shared)) => assert!(Arc::ptr_eq(shared, &series)),
        other => panic!("unexpected dataset {:?}", other),
    }
}

#[test]
fn extreme_offsets_build_valid_charts() {
    let series = series();
    let mut builder = BuildChartUseCase::new(ChartStyle::default(), DAY_MS, Box::new(FakeClock::default()));
    for dx in [-30, 30, -1000, 1000] {
        let controls = ChartControls::new("⬇", dx, -10);
        let chart = builder.execute(&series, &controls).unwrap();
        let expected = dx.clamp(-30, 30);
        assert_eq!(chart.layers[3].mark.dx.map(|p| p.value()), Some(expected));
        assert!(chart.validate().is_ok());
    }
}

#[test]
fn base_is_cached_for_a_day() {
    let series = series();
    let clock = FakeClock::default();
    let mut builder = BuildChartUseCase::new(ChartStyle::default(), DAY_MS, Box::new(clock.clone()));

    builder.execute(&series, &ChartControls::default()).unwrap();
    clock.advance(DAY_MS - 1);
    builder.execute(&series, &ChartControls::new("💬", 3, 4)).unwrap();
    assert_eq!(builder.cache_stats().hits, 1);
    assert_eq!(builder.cache_stats().misses, 1);

    clock.advance(1);
    builder.execute(&series, &ChartControls::default()).unwrap();
    assert_eq!(builder.cache_stats().misses, 2);
    assert_eq!(builder.cached_charts(), 1);
}

#[test]
fn distinct_series_get_distinct_entries() {
    let full = series();
    let cutoff = TradingDate::from_ymd(2008, 1, 1).unwrap();
    let shorter = Arc::new(full.after(cutoff));

    let mut builder = BuildChartUseCase::new(ChartStyle::default(), DAY_MS, Box::new(FakeClock::default()));
    builder.execute(&full, &ChartControls::default()).unwrap();
    builder.execute(&shorter, &ChartControls::default()).unwrap();
    assert_eq!(builder.cached_charts(), 2);
}

#[test]
fn saturated_ttl_never_expires() {
    let series = series();
    let clock = FakeClock::default();
    let mut builder = BuildChartUseCase::new(ChartStyle::default(), u64::MAX, Box::new(clock.clone()));

    builder.execute(&series, &ChartControls::default()).unwrap();
    clock.advance(u64::MAX - 1);
    builder.execute(&series, &ChartControls::default()).unwrap();
    assert_eq!(builder.cache_stats().misses, 1);
    assert_eq!(builder.cache_stats().hits, 1);
}

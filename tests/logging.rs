use solar_dashboard_wasm::domain::logging::{
    LogComponent, LogEntry, LogLevel, Logger, get_logger, init_logger,
};
use solar_dashboard_wasm::domain::session::{Session, StaticCredentials};
use solar_dashboard_wasm::{log_error, log_info, log_warn};
use std::sync::Mutex;

static LINES: Mutex<Vec<(LogLevel, String)>> = Mutex::new(Vec::new());

struct RecordingLogger;

impl Logger for RecordingLogger {
    fn log(&self, entry: LogEntry) {
        let line = entry.format_line("t");
        LINES.lock().unwrap().push((entry.level, line));
    }
}

fn install() {
    init_logger(Box::new(RecordingLogger));
}

fn recorded(needle: &str) -> Vec<(LogLevel, String)> {
    LINES.lock().unwrap().iter().filter(|(_, line)| line.contains(needle)).cloned().collect()
}

#[test]
fn macros_reach_the_installed_logger() {
    install();
    log_info!(LogComponent::Application("Test"), "loaded {} rows", 364);
    log_warn!(LogComponent::Infrastructure("Test"), "config {}", "ignored");
    log_error!(LogComponent::Presentation("Test"), "render failed: {}", "boom");

    assert_eq!(
        recorded("loaded 364 rows"),
        vec![(LogLevel::Info, "[t]  INFO APP:Test | loaded 364 rows".to_string())]
    );
    assert_eq!(recorded("config ignored")[0].0, LogLevel::Warn);
    assert_eq!(
        recorded("render failed: boom"),
        vec![(LogLevel::Error, "[t] ERROR PRE:Test | render failed: boom".to_string())]
    );
}

#[test]
fn session_transitions_are_logged() {
    install();
    let mut session = Session::new();
    session.attempt_login(&StaticCredentials::default(), "Panel", "123456");
    session.logout();

    assert_eq!(recorded("DOM:Session | login accepted").len(), 1);
    assert_eq!(recorded("DOM:Session | logged out").len(), 1);
}

#[test]
fn logger_is_reachable_through_the_global() {
    install();
    get_logger().warn(LogComponent::Domain("Direct"), "direct call");
    assert_eq!(recorded("DOM:Direct | direct call").len(), 1);
}

struct FrozenClock;

impl solar_dashboard_wasm::domain::logging::TimeProvider for FrozenClock {
    fn current_timestamp(&self) -> u64 {
        0
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        timestamp.to_string()
    }
}

#[cfg(debug_assertions)]
#[test]
fn chart_service_reports_cache_counters() {
    use solar_dashboard_wasm::application::ChartApplicationService;
    use solar_dashboard_wasm::config::DashboardConfig;
    use solar_dashboard_wasm::domain::chart::ChartControls;
    use solar_dashboard_wasm::infrastructure::CsvPriceRepository;

    install();
    let mut service = ChartApplicationService::new(
        &DashboardConfig::default(),
        Box::new(CsvPriceRepository::bundled()),
        Box::new(FrozenClock),
    );
    service.chart_for(&ChartControls::new("Q", 1, 2)).unwrap();
    service.chart_for(&ChartControls::new("Q", 1, 2)).unwrap();

    let lines: Vec<String> = recorded("ticker 'Q'").into_iter().map(|(_, line)| line).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("cache hits=0 misses=1"), "{}", lines[0]);
    assert!(lines[1].ends_with("cache hits=1 misses=1"), "{}", lines[1]);
}

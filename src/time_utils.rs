use chrono::NaiveDate;

/// Spellings accepted for calendar dates, tried in order.
///
/// - `Jan 1 2000` (bundled dataset)
/// - `Mar 01, 2008` (annotation table)
/// - `2008-03-01` (ISO, used by config overrides)
const DATE_FORMATS: [&str; 3] = ["%b %d %Y", "%b %d, %Y", "%Y-%m-%d"];

pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| format!("unrecognised date '{}'", raw))
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

const MILLIS_PER_HOUR: u64 = 60 * 60 * 1000;

/// Milliseconds in `hours` hours; cache lifetimes are configured in hours.
/// Saturates, so an absurd config value means "never expires".
pub fn hours_to_millis(hours: u64) -> u64 {
    hours.saturating_mul(MILLIS_PER_HOUR)
}

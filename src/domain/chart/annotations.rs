use serde::Serialize;

use crate::domain::errors::{AppError, DashboardResult};
use crate::domain::market_data::TradingDate;

/// Events pinned to the price chart, as `(date, event)`.
pub const ANNOTATIONS: [(&str, &str); 4] = [
    ("Mar 01, 2008", "Pretty good day for GOOG"),
    ("Dec 01, 2007", "Something's going wrong for GOOG & AAPL"),
    ("Nov 01, 2008", "Market starts again thanks to..."),
    ("Dec 01, 2009", "Small crash for GOOG after..."),
];

/// Baseline the annotation glyphs sit on before pixel offsets apply.
pub const ANNOTATION_BASELINE: i32 = 0;

/// One plotted annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationRow {
    pub date: TradingDate,
    pub event: String,
    pub y: i32,
}

/// The fixed annotation table with its y column, in declaration order.
pub fn annotation_table() -> DashboardResult<Vec<AnnotationRow>> {
    ANNOTATIONS
        .iter()
        .map(|(date, event)| {
            let date = TradingDate::parse(date).map_err(AppError::Dataset)?;
            Ok(AnnotationRow { date, event: event.to_string(), y: ANNOTATION_BASELINE })
        })
        .collect()
}

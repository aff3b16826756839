use serde::Deserialize;
use std::borrow::Cow;

use crate::log_debug;
use crate::domain::{
    errors::{AppError, DashboardResult},
    logging::LogComponent,
    market_data::{Price, PricePoint, PriceRepository, PriceSeries, Symbol, TradingDate},
};

/// Monthly closes for MSFT, AMZN, IBM, GOOG and AAPL, 2000 to 2010.
const BUNDLED_STOCKS_CSV: &str = include_str!("../../data/stocks.csv");

/// Raw row as it appears in the CSV (`symbol,date,price`)
#[derive(Debug, Deserialize)]
struct StockRecord {
    symbol: String,
    date: String,
    price: f64,
}

/// Price table read from CSV text held in memory.
pub struct CsvPriceRepository {
    source: Cow<'static, str>,
}

impl CsvPriceRepository {
    /// The table compiled into the binary.
    pub fn bundled() -> Self {
        Self { source: Cow::Borrowed(BUNDLED_STOCKS_CSV) }
    }

    pub fn from_csv(source: impl Into<String>) -> Self {
        Self { source: Cow::Owned(source.into()) }
    }
}

impl PriceRepository for CsvPriceRepository {
    fn load_all(&self) -> DashboardResult<PriceSeries> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(self.source.as_bytes());

        let mut points = Vec::new();
        for (idx, result) in reader.deserialize::<StockRecord>().enumerate() {
            // +2: header line plus 1-based numbering
            let line = idx + 2;
            let record = result?;
            let date = TradingDate::parse(&record.date)
                .map_err(|e| AppError::Dataset(format!("line {}: {}", line, e)))?;
            let symbol = Symbol::new(record.symbol)
                .map_err(|e| AppError::Dataset(format!("line {}: {}", line, e)))?;
            points.push(PricePoint::new(date, symbol, Price::from(record.price)));
        }

        log_debug!(LogComponent::Infrastructure("CsvPriceRepository"), "parsed {} price rows", points.len());
        Ok(PriceSeries::new(points))
    }
}

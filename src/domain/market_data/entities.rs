use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{DefaultHasher, Hash, Hasher};

pub use super::value_objects::{Price, Symbol, TradingDate};

/// Domain entity - one monthly observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub symbol: Symbol,
    pub price: Price,
}

impl PricePoint {
    pub fn new(date: TradingDate, symbol: Symbol, price: Price) -> Self {
        Self { date, symbol, price }
    }
}

/// Domain entity - ordered, read-only price table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Keeps the source order (symbol blocks, each chronological).
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    /// Rows whose date is strictly after `cutoff`.
    pub fn after(&self, cutoff: TradingDate) -> Self {
        Self {
            points: self.points.iter().filter(|p| p.date > cutoff).cloned().collect(),
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.points.iter().map(|p| p.symbol.clone()).collect()
    }

    pub fn date_range(&self) -> Option<(TradingDate, TradingDate)> {
        let first = self.points.iter().map(|p| p.date).min()?;
        let last = self.points.iter().map(|p| p.date).max()?;
        Some((first, last))
    }

    /// Content hash used as the chart cache key. Two series with the same
    /// rows in the same order share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.points.len().hash(&mut hasher);
        for point in &self.points {
            point.date.hash(&mut hasher);
            point.symbol.hash(&mut hasher);
            point.price.value().to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

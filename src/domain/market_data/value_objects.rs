use chrono::NaiveDate;
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::time_utils;

/// Value Object - closing price in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - ticker symbol, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - calendar date of an observation.
///
/// Serialized as ISO `YYYY-MM-DD`, which every chart backend reads as a
/// temporal field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct TradingDate(NaiveDate);

impl TradingDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Accepts both the dataset spelling (`Jan 1 2000`) and the annotation
    /// spelling (`Mar 01, 2008`), plus ISO dates.
    pub fn parse(raw: &str) -> Result<Self, String> {
        time_utils::parse_calendar_date(raw).map(Self)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn iso(&self) -> String {
        time_utils::format_iso(self.0)
    }
}

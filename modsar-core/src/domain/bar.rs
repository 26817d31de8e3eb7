//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLC bar for a single trading period.
///
/// Bars are immutable once observed and ordered ascending by `date`; the
/// engine only reads high/low/close and relies on the caller for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Returns true if every price field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
    }

    /// Basic sanity check: all prices finite and `high >= low`.
    pub fn is_sane(&self) -> bool {
        self.is_finite() && self.high >= self.low
    }
}

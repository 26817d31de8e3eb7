//! Latest-state summary for presentation layers.
//!
//! Maps the last bar and last SAR point to a report: trend label, close,
//! stop level, and the distance between them as a percentage of the close.
//! In an uptrend the stop is support below price; in a downtrend it is
//! resistance above. The distance is positive in both framings.

use crate::domain::Bar;
use crate::sar::{SarPoint, Trend};
use serde::Serialize;
use std::fmt;

/// Snapshot of the most recent bar's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSnapshot {
    pub trend: Trend,
    pub close: f64,
    pub stop: f64,
    /// Distance from close to stop, as a percentage of close.
    pub distance_pct: f64,
}

impl TrendSnapshot {
    /// Build from parallel bar/point series; None if either is empty.
    pub fn from_series(bars: &[Bar], points: &[SarPoint]) -> Option<Self> {
        debug_assert_eq!(bars.len(), points.len());
        let bar = bars.last()?;
        let point = points.last()?;
        let distance_pct = match point.trend {
            Trend::Up => (bar.close - point.stop) / bar.close * 100.0,
            Trend::Down => (point.stop - bar.close) / bar.close * 100.0,
        };
        Some(Self {
            trend: point.trend,
            close: bar.close,
            stop: point.stop,
            distance_pct,
        })
    }

    /// Human trend label.
    pub fn label(&self) -> &'static str {
        match self.trend {
            Trend::Up => "bullish",
            Trend::Down => "bearish",
        }
    }

    /// What the stop level acts as in the current regime.
    pub fn stop_role(&self) -> &'static str {
        match self.trend {
            Trend::Up => "support",
            Trend::Down => "resistance",
        }
    }
}

impl fmt::Display for TrendSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — close {:.2}, {} at {:.2} ({:.2}% away)",
            self.label(),
            self.close,
            self.stop_role(),
            self.stop,
            self.distance_pct
        )
    }
}

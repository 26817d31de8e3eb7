//! SAR state and the per-bar transition.
//!
//! The recurrence is inherently sequential: the state at bar i depends on
//! the state at bar i-1. It is expressed as a pure transition
//! `(state, bar) -> state` so the rule can be unit tested without the
//! scan driver.

use crate::domain::Bar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}

/// Derived quantities carried from bar i to bar i+1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SarState {
    /// Current stop-and-reverse price level.
    pub stop: f64,
    /// Current regime.
    pub trend: Trend,
    /// Acceleration factor, in [af_start, af_limit].
    pub accel: f64,
    /// Highest high since the last reversal (Up) or lowest low (Down).
    pub extreme: f64,
}

impl SarState {
    /// Initial state from the head of the series.
    ///
    /// Trend is Up if the second close is strictly above the first (ties
    /// seed Down); a single-bar series seeds Up. The stop starts at the
    /// first bar's low (Up) or high (Down), the extreme at the opposite end.
    pub fn seed(bars: &[Bar], af_start: f64) -> Self {
        let trend = match bars.get(1) {
            Some(second) if second.close <= bars[0].close => Trend::Down,
            _ => Trend::Up,
        };
        let (stop, extreme) = match trend {
            Trend::Up => (bars[0].low, bars[0].high),
            Trend::Down => (bars[0].high, bars[0].low),
        };
        Self {
            stop,
            trend,
            accel: af_start,
            extreme,
        }
    }

    /// Advance the state by one bar.
    ///
    /// Two-level test: the candidate stop is first checked against the
    /// bar's intraday extreme (inclusive — a low/high landing exactly on
    /// the stop counts as a touch), then the close decides between a
    /// reversal and a plain AF reset. The extreme/AF update runs last, on
    /// the possibly-updated trend.
    pub fn step(&self, bar: &Bar, af_start: f64, af_limit: f64) -> Self {
        let candidate = self.stop + self.accel * (self.extreme - self.stop);
        let mut next = Self {
            stop: candidate,
            ..*self
        };

        match self.trend {
            Trend::Up => {
                if bar.low <= candidate {
                    if bar.close > candidate {
                        // Touched intraday but the close held: no reversal,
                        // AF starts over.
                        next.accel = af_start;
                    } else {
                        // Close confirms the breach: reverse, stop relocates
                        // to the prior extreme.
                        next.trend = Trend::Down;
                        next.stop = self.extreme;
                        next.accel = af_start;
                        next.extreme = bar.low;
                    }
                }
            }
            Trend::Down => {
                if bar.high >= candidate {
                    if bar.close < candidate {
                        next.accel = af_start;
                    } else {
                        next.trend = Trend::Up;
                        next.stop = self.extreme;
                        next.accel = af_start;
                        next.extreme = bar.high;
                    }
                }
            }
        }

        match next.trend {
            Trend::Up if bar.high > next.extreme => {
                next.extreme = bar.high;
                next.accel = (next.accel + af_start).min(af_limit);
            }
            Trend::Down if bar.low < next.extreme => {
                next.extreme = bar.low;
                next.accel = (next.accel + af_start).min(af_limit);
            }
            _ => {}
        }

        next
    }
}

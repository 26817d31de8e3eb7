//! Modified parabolic SAR — Wilder's acceleration factor system with a
//! touch-vs-close reversal rule.
//!
//! The classical SAR reverses on any intraday touch of the stop. The
//! modified variant adds a second test: an intraday touch only reverses
//! the trend when the close confirms the breach; a touch the close holds
//! against merely resets the acceleration factor. This suppresses
//! single-bar whipsaw reversals.
//!
//! `state` holds the per-bar transition; `engine` drives the scan and
//! validates inputs.

pub mod engine;
pub mod state;

pub use engine::{ModifiedSar, SarError, SarPoint};
pub use state::{SarState, Trend};

/// Create bars from (high, low, close) triples for testing.
///
/// Open is set to the midpoint; the engine never reads it.
#[cfg(test)]
pub fn make_hlc_bars(data: &[(f64, f64, f64)]) -> Vec<crate::domain::Bar> {
    use crate::domain::Bar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(high, low, close))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            open: (high + low) / 2.0,
            high,
            low,
            close,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for engine tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-9;

//! Property tests for engine invariants.
//!
//! Uses proptest to verify, over random well-formed bar series:
//! 1. Length preservation — output matches input length
//! 2. AF bounds — accel stays within [af_start, af_limit]
//! 3. Extreme monotonicity — the extreme only extends within a regime
//! 4. Stop finiteness — no NaN/inf ever escapes the scan

use chrono::NaiveDate;
use modsar_core::domain::Bar;
use modsar_core::sar::{ModifiedSar, Trend};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

/// One bar as (center, half-range, close position within the range).
fn arb_bar_shape() -> impl Strategy<Value = (f64, f64, f64)> {
    (10.0..500.0_f64, 0.0..5.0_f64, 0.0..=1.0_f64)
}

fn arb_bars() -> impl Strategy<Value = Vec<Bar>> {
    prop::collection::vec(arb_bar_shape(), 1..60).prop_map(|shapes| {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        shapes
            .iter()
            .enumerate()
            .map(|(i, &(center, half_range, close_frac))| {
                let high = center + half_range;
                let low = center - half_range;
                Bar {
                    date: base_date + chrono::Duration::days(i as i64),
                    open: center,
                    high,
                    low,
                    close: low + close_frac * (high - low),
                }
            })
            .collect()
    })
}

fn arb_params() -> impl Strategy<Value = (f64, f64)> {
    (0.005..0.05_f64, 2.0..20.0_f64).prop_map(|(start, mult)| (start, start * mult))
}

// ── 1. Length Preservation ───────────────────────────────────────────

proptest! {
    /// For all valid inputs, the output has the same length as the input.
    #[test]
    fn output_length_matches_input(bars in arb_bars(), (af_start, af_limit) in arb_params()) {
        let sar = ModifiedSar::new(af_start, af_limit).unwrap();
        let points = sar.compute(&bars).unwrap();
        prop_assert_eq!(points.len(), bars.len());
    }

    // ── 2. AF Bounds ─────────────────────────────────────────────────

    /// accel never leaves [af_start, af_limit].
    #[test]
    fn accel_within_bounds(bars in arb_bars(), (af_start, af_limit) in arb_params()) {
        let sar = ModifiedSar::new(af_start, af_limit).unwrap();
        let states = sar.compute_states(&bars).unwrap();
        for state in &states {
            prop_assert!(state.accel >= af_start - 1e-12);
            prop_assert!(state.accel <= af_limit + 1e-12);
        }
    }

    // ── 3. Extreme Monotonicity ──────────────────────────────────────

    /// Between reversals the extreme is non-decreasing (Up) or
    /// non-increasing (Down).
    #[test]
    fn extreme_monotone_within_regime(bars in arb_bars(), (af_start, af_limit) in arb_params()) {
        let sar = ModifiedSar::new(af_start, af_limit).unwrap();
        let states = sar.compute_states(&bars).unwrap();
        for pair in states.windows(2) {
            if pair[0].trend == pair[1].trend {
                match pair[1].trend {
                    Trend::Up => prop_assert!(pair[1].extreme >= pair[0].extreme),
                    Trend::Down => prop_assert!(pair[1].extreme <= pair[0].extreme),
                }
            }
        }
    }

    // ── 4. Stop Finiteness ───────────────────────────────────────────

    /// Finite bars in, finite stops and extremes out.
    #[test]
    fn stops_stay_finite(bars in arb_bars(), (af_start, af_limit) in arb_params()) {
        let sar = ModifiedSar::new(af_start, af_limit).unwrap();
        let states = sar.compute_states(&bars).unwrap();
        for state in &states {
            prop_assert!(state.stop.is_finite());
            prop_assert!(state.extreme.is_finite());
        }
    }
}

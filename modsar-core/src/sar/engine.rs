//! Scan driver: parameter validation, eager bar validation, forward scan.

use crate::domain::Bar;
use crate::sar::state::{SarState, Trend};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error types for the SAR engine.
///
/// All errors surface synchronously before any recurrence step runs; no
/// partial result is ever produced.
#[derive(Debug, Error)]
pub enum SarError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("malformed bar at index {index}: {reason}")]
    MalformedBar { index: usize, reason: String },
}

/// One output position: the stop level and regime at a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SarPoint {
    pub stop: f64,
    pub trend: Trend,
}

/// Modified parabolic SAR.
///
/// Parameters: af_start (initial acceleration factor, also the per-step
/// increment) and af_limit (AF ceiling).
#[derive(Debug, Clone, Copy)]
pub struct ModifiedSar {
    af_start: f64,
    af_limit: f64,
}

impl ModifiedSar {
    pub fn new(af_start: f64, af_limit: f64) -> Result<Self, SarError> {
        if !af_start.is_finite() || af_start <= 0.0 {
            return Err(SarError::InvalidParameter(format!(
                "af_start must be a positive number, got {af_start}"
            )));
        }
        if !af_limit.is_finite() || af_limit < af_start {
            return Err(SarError::InvalidParameter(format!(
                "af_limit must be >= af_start ({af_start}), got {af_limit}"
            )));
        }
        Ok(Self { af_start, af_limit })
    }

    /// Default parameters: 0.02, 0.20
    pub fn default_params() -> Self {
        Self {
            af_start: 0.02,
            af_limit: 0.20,
        }
    }

    pub fn af_start(&self) -> f64 {
        self.af_start
    }

    pub fn af_limit(&self) -> f64 {
        self.af_limit
    }

    /// Compute the full state sequence, same length as `bars`.
    ///
    /// Exposes accel and extreme alongside stop and trend, for callers
    /// that inspect the bookkeeping (and for invariant tests).
    pub fn compute_states(&self, bars: &[Bar]) -> Result<Vec<SarState>, SarError> {
        if bars.is_empty() {
            return Err(SarError::InvalidParameter("empty bar series".into()));
        }
        for (index, bar) in bars.iter().enumerate() {
            if !bar.is_finite() {
                return Err(SarError::MalformedBar {
                    index,
                    reason: "non-finite price".into(),
                });
            }
            if bar.high < bar.low {
                return Err(SarError::MalformedBar {
                    index,
                    reason: format!("high {} below low {}", bar.high, bar.low),
                });
            }
        }

        let mut state = SarState::seed(bars, self.af_start);
        let mut states = Vec::with_capacity(bars.len());
        states.push(state);
        for bar in &bars[1..] {
            state = state.step(bar, self.af_start, self.af_limit);
            states.push(state);
        }
        Ok(states)
    }

    /// Compute the (stop, trend) series, same length as `bars`.
    pub fn compute(&self, bars: &[Bar]) -> Result<Vec<SarPoint>, SarError> {
        Ok(self
            .compute_states(bars)?
            .iter()
            .map(|s| SarPoint {
                stop: s.stop,
                trend: s.trend,
            })
            .collect())
    }
}

//! modsar Core — domain types and the modified parabolic SAR engine.
//!
//! This crate contains:
//! - Domain types (daily OHLC bars)
//! - The SAR engine: a forward scan threading an explicit state struct
//!   (stop, trend, acceleration factor, extreme point) through the bar
//!   series, with the touch-vs-close reversal rule
//! - Latest-state summary for presentation layers
//!
//! The engine is a pure function of its inputs: it holds no state between
//! invocations, fetches no data, and renders nothing. Callers supply an
//! ordered bar series and two acceleration-factor parameters.

pub mod domain;
pub mod sar;
pub mod summary;

//! chart-binning: calendar-aligned brushing for time-series charts.
//!
//! `core` holds the pure interval rounder and its calendar; `api` holds the
//! stateful bin synchronizer that turns brush drags into range filters on a
//! host chart.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BinningChart, BinningConfig, BrushSyncOutcome};
pub use crate::core::{Granularity, IntervalRounder, RoundingMode, UtcCalendar, align};
pub use error::{ChartError, ChartResult};

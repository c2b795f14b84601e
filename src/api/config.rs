use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::{Granularity, RoundingMode, UtcCalendar};

/// Public binning bootstrap configuration.
///
/// Serializable so hosts can persist a chart's bin setup alongside the rest of
/// their dashboard state. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinningConfig {
    #[serde(default)]
    pub initial_granularity: Granularity,
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
    #[serde(default)]
    pub brush_rounding: RoundingMode,
    /// Opt-in: clamp raw brush ends into the axis domain before alignment.
    #[serde(default)]
    pub clamp_to_axis: bool,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            initial_granularity: Granularity::Auto,
            week_start: default_week_start(),
            brush_rounding: RoundingMode::Round,
            clamp_to_axis: false,
        }
    }
}

impl BinningConfig {
    #[must_use]
    pub fn with_initial_granularity(mut self, granularity: Granularity) -> Self {
        self.initial_granularity = granularity;
        self
    }

    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub fn with_brush_rounding(mut self, mode: RoundingMode) -> Self {
        self.brush_rounding = mode;
        self
    }

    #[must_use]
    pub fn with_clamp_to_axis(mut self, enabled: bool) -> Self {
        self.clamp_to_axis = enabled;
        self
    }

    #[must_use]
    pub fn calendar(self) -> UtcCalendar {
        UtcCalendar::new(self.week_start)
    }
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}

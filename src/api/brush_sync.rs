use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisDomain, CalendarBoundaries, Granularity};
use crate::error::ChartResult;

use super::{BinningChart, BinningHost};

/// What a `synchronize_brush` pass did to the chart's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushSyncOutcome {
    /// No brush exists yet; nothing was touched.
    NoBrush,
    /// Brush collapsed to one instant; nothing was touched.
    EmptySelection,
    /// Selection ended before the axis minimum; the filter was cleared.
    Cleared,
    /// A range filter with these aligned bounds was applied.
    Filtered {
        lower: DateTime<Utc>,
        upper: DateTime<Utc>,
    },
}

impl BrushSyncOutcome {
    /// `true` when the pass replaced or cleared the filter and redrew.
    #[must_use]
    pub fn changed_filter(self) -> bool {
        matches!(self, Self::Cleared | Self::Filtered { .. })
    }
}

impl<H: BinningHost, C: CalendarBoundaries> BinningChart<H, C> {
    /// Granularity used for alignment in the next pass.
    ///
    /// While `auto` is selected, the bin the data group resolved to wins when
    /// the host reports one.
    #[must_use]
    pub fn effective_granularity(&self) -> Granularity {
        match self.state.selected_granularity {
            Granularity::Auto => self
                .host
                .resolved_granularity()
                .unwrap_or(Granularity::Auto),
            selected => selected,
        }
    }

    /// Re-aligns the current brush to bin boundaries and updates the filter.
    ///
    /// Filter replacement always precedes the single group redraw. Empty or
    /// missing selections touch neither.
    pub fn synchronize_brush(&mut self) -> ChartResult<BrushSyncOutcome> {
        let outcome = self.apply_brush_extent()?;
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    fn apply_brush_extent(&mut self) -> ChartResult<BrushSyncOutcome> {
        let Some(extent) = self.host.extent() else {
            trace!(chart = %self.id, "no brush extent; bin sync skipped");
            return Ok(BrushSyncOutcome::NoBrush);
        };
        if extent.is_empty() {
            trace!(chart = %self.id, at = %extent.start(), "empty brush; bin sync skipped");
            return Ok(BrushSyncOutcome::EmptySelection);
        }

        let granularity = self.effective_granularity();
        let axis = AxisDomain::new(self.host.min(), self.host.max());

        if extent.end() < axis.min() {
            debug!(
                chart = %self.id,
                brush_end = %extent.end(),
                axis_min = %axis.min(),
                "brush ends before axis domain; clearing filter"
            );
            self.host.replace_filter(None)?;
            self.host.redraw_group()?;
            return Ok(BrushSyncOutcome::Cleared);
        }

        let extent = if self.config.clamp_to_axis {
            axis.clamp_extent(extent)
        } else {
            extent
        };
        let (lower, upper) = self.rounder.align_extent(
            extent.start(),
            extent.end(),
            granularity,
            self.config.brush_rounding,
        )?;

        debug!(
            chart = %self.id,
            %granularity,
            %lower,
            %upper,
            "applying binned range filter"
        );
        let filter = self.host.construct_range_filter(lower, upper);
        self.host.replace_filter(Some(filter))?;
        self.host.commit_filter()?;
        self.host.redraw_group()?;
        Ok(BrushSyncOutcome::Filtered { lower, upper })
    }
}

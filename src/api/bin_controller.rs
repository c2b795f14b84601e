use tracing::debug;

use crate::core::{CalendarBoundaries, Granularity};
use crate::error::ChartResult;

use super::{BIN_EVENT, BinChartContext, BinEvent, BinningChart, BinningHost, BrushSyncOutcome};

impl<H: BinningHost, C: CalendarBoundaries> BinningChart<H, C> {
    /// Handles a bin picker change.
    ///
    /// Stores the value, emits `BIN_EVENT` (even when unchanged), requests an
    /// async re-render and re-aligns the current brush without waiting for
    /// that render.
    pub fn change_granularity(
        &mut self,
        granularity: Granularity,
    ) -> ChartResult<BrushSyncOutcome> {
        let previous = self.state.selected_granularity;
        self.set_granularity(granularity);

        let event = BinEvent {
            chart: BinChartContext {
                chart_id: self.id.clone(),
                previous_granularity: previous,
                selected_granularity: granularity,
            },
            granularity,
        };
        let notified = self.events.emit(BIN_EVENT, &event);
        debug!(
            chart = %self.id,
            %previous,
            %granularity,
            listeners = notified,
            "granularity changed"
        );

        self.host.render_async()?;
        self.synchronize_brush()
    }

    /// Parses a picker value, then behaves like `change_granularity`.
    ///
    /// Unknown names fail before any state change or emission.
    pub fn change_granularity_by_name(&mut self, name: &str) -> ChartResult<BrushSyncOutcome> {
        let granularity: Granularity = name.parse()?;
        self.change_granularity(granularity)
    }
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CalendarBoundaries, Granularity, IntervalRounder, UtcCalendar};
use crate::error::{ChartError, ChartResult};

use super::{
    BIN_EVENT, BinEvent, BinningConfig, BinningHost, BrushSyncOutcome, EventRegistry, ListenerId,
};

/// Per-chart bin selection. Mutated only through `BinningChart::set_granularity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BinState {
    pub selected_granularity: Granularity,
}

/// Time-series chart mixin that snaps brush selections to calendar bins.
///
/// `BinningChart` owns the selected granularity and the bin listeners; the
/// brush, axis, filters and rendering stay with the host `H`.
pub struct BinningChart<H: BinningHost, C: CalendarBoundaries = UtcCalendar> {
    pub(super) id: String,
    pub(super) host: H,
    pub(super) config: BinningConfig,
    pub(super) state: BinState,
    pub(super) rounder: IntervalRounder<C>,
    pub(super) events: EventRegistry<BinEvent>,
    pub(super) last_outcome: Option<BrushSyncOutcome>,
}

impl<H: BinningHost> BinningChart<H> {
    /// Creates a chart using the UTC calendar described by `config`.
    pub fn new(id: impl Into<String>, host: H, config: BinningConfig) -> ChartResult<Self> {
        let rounder = IntervalRounder::new(config.calendar());
        Self::with_rounder(id, host, config, rounder)
    }
}

impl<H: BinningHost, C: CalendarBoundaries> BinningChart<H, C> {
    /// Creates a chart with a custom boundary calendar.
    ///
    /// `config.week_start` is ignored here; the calendar decides week anchors.
    pub fn with_rounder(
        id: impl Into<String>,
        host: H,
        config: BinningConfig,
        rounder: IntervalRounder<C>,
    ) -> ChartResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(ChartError::InvalidData(
                "chart id must not be empty".to_owned(),
            ));
        }
        trace!(chart = %id, granularity = %config.initial_granularity, "binning chart created");
        Ok(Self {
            id,
            host,
            config,
            state: BinState {
                selected_granularity: config.initial_granularity,
            },
            rounder,
            events: EventRegistry::default(),
            last_outcome: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> BinningConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> BinState {
        self.state
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.state.selected_granularity
    }

    /// Stores the selected granularity without emitting or re-filtering.
    pub fn set_granularity(&mut self, granularity: Granularity) -> &mut Self {
        self.state.selected_granularity = granularity;
        self
    }

    #[must_use]
    pub fn rounder(&self) -> &IntervalRounder<C> {
        &self.rounder
    }

    /// Outcome of the most recent `synchronize_brush` pass.
    #[must_use]
    pub fn last_outcome(&self) -> Option<BrushSyncOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    pub fn on(&mut self, event: &str, listener: impl FnMut(&BinEvent) + 'static) -> ListenerId {
        self.events.on(event, listener)
    }

    /// Shorthand for `on(BIN_EVENT, listener)`.
    pub fn on_bin(&mut self, listener: impl FnMut(&BinEvent) + 'static) -> ListenerId {
        self.events.on(BIN_EVENT, listener)
    }

    /// Removes a listener. Returns `true` when removed.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        self.events.off(event, id)
    }

    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.events.listener_count(event)
    }
}

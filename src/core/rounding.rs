use chrono::{DateTime, Utc};

use crate::core::{CalendarBoundaries, Granularity, RoundingMode, UtcCalendar};
use crate::error::{ChartError, ChartResult};

/// Snaps instants onto the boundaries of an injected calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalRounder<C = UtcCalendar> {
    calendar: C,
}

impl<C: CalendarBoundaries> IntervalRounder<C> {
    #[must_use]
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    #[must_use]
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Aligns `instant` to a boundary of `granularity`.
    ///
    /// `Auto` returns the input untouched. `Round` picks the boundary closer
    /// in elapsed time and resolves an exact tie towards the ceiling; when the
    /// ceiling lies past the calendar's range the floor is the only candidate.
    pub fn align(
        &self,
        instant: DateTime<Utc>,
        granularity: Granularity,
        mode: RoundingMode,
    ) -> ChartResult<DateTime<Utc>> {
        if granularity.is_auto() {
            return Ok(instant);
        }

        let floor = self.calendar.floor(instant, granularity)?;
        if floor == instant {
            return Ok(instant);
        }

        match mode {
            RoundingMode::Floor => Ok(floor),
            RoundingMode::Ceil => self.calendar.offset(floor, granularity, 1),
            RoundingMode::Round => match self.calendar.offset(floor, granularity, 1) {
                Ok(ceil) if ceil - instant <= instant - floor => Ok(ceil),
                Ok(_) | Err(ChartError::InstantOutOfRange { .. }) => Ok(floor),
                Err(err) => Err(err),
            },
        }
    }

    /// Parses `granularity` by name before aligning.
    pub fn align_named(
        &self,
        instant: DateTime<Utc>,
        granularity: &str,
        mode: RoundingMode,
    ) -> ChartResult<DateTime<Utc>> {
        self.align(instant, granularity.parse()?, mode)
    }

    /// Aligns both ends of a range independently with the same granularity.
    pub fn align_extent(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        granularity: Granularity,
        mode: RoundingMode,
    ) -> ChartResult<(DateTime<Utc>, DateTime<Utc>)> {
        Ok((
            self.align(start, granularity, mode)?,
            self.align(end, granularity, mode)?,
        ))
    }
}

/// Aligns `instant` using the default Sunday-week UTC calendar.
pub fn align(
    instant: DateTime<Utc>,
    granularity: Granularity,
    mode: RoundingMode,
) -> ChartResult<DateTime<Utc>> {
    IntervalRounder::new(UtcCalendar::default()).align(instant, granularity, mode)
}

use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc, Weekday,
};
use serde::{Deserialize, Serialize};

use crate::core::Granularity;
use crate::error::{ChartError, ChartResult};

/// Source of calendar-aligned boundary instants for each granularity.
///
/// Implementations define a monotonically increasing boundary sequence per
/// granularity. `Granularity::Auto` is the identity in both operations.
pub trait CalendarBoundaries {
    /// Greatest boundary that is `<= instant`.
    fn floor(
        &self,
        instant: DateTime<Utc>,
        granularity: Granularity,
    ) -> ChartResult<DateTime<Utc>>;

    /// Moves a boundary by `steps` whole units. Only called with values
    /// produced by `floor`.
    fn offset(
        &self,
        boundary: DateTime<Utc>,
        granularity: Granularity,
        steps: i64,
    ) -> ChartResult<DateTime<Utc>>;

    /// Least boundary that is `>= instant`.
    fn ceil(
        &self,
        instant: DateTime<Utc>,
        granularity: Granularity,
    ) -> ChartResult<DateTime<Utc>> {
        let floored = self.floor(instant, granularity)?;
        if floored == instant {
            return Ok(instant);
        }
        self.offset(floored, granularity, 1)
    }
}

/// Proleptic Gregorian calendar evaluated in UTC.
///
/// Quarters start in January/April/July/October, decades and centuries on
/// years divisible by 10 and 100. Weeks start at midnight on `week_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcCalendar {
    pub week_start: Weekday,
}

impl Default for UtcCalendar {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl UtcCalendar {
    #[must_use]
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    fn floor_naive(&self, naive: NaiveDateTime, granularity: Granularity) -> Option<NaiveDateTime> {
        let date = naive.date();
        match granularity {
            Granularity::Auto => Some(naive),
            Granularity::Second => naive.with_nanosecond(0),
            Granularity::Minute => date.and_hms_opt(naive.hour(), naive.minute(), 0),
            Granularity::Hour => date.and_hms_opt(naive.hour(), 0, 0),
            Granularity::Day => date.and_hms_opt(0, 0, 0),
            Granularity::Week => {
                let back = (date.weekday().num_days_from_sunday() + 7
                    - self.week_start.num_days_from_sunday())
                    % 7;
                date.checked_sub_days(Days::new(u64::from(back)))?
                    .and_hms_opt(0, 0, 0)
            }
            Granularity::Month => month_start(date.year(), date.month()),
            Granularity::Quarter => month_start(date.year(), (date.month0() / 3) * 3 + 1),
            Granularity::Year => month_start(date.year(), 1),
            Granularity::Decade => month_start(date.year().div_euclid(10) * 10, 1),
            Granularity::Century => month_start(date.year().div_euclid(100) * 100, 1),
        }
    }
}

impl CalendarBoundaries for UtcCalendar {
    fn floor(
        &self,
        instant: DateTime<Utc>,
        granularity: Granularity,
    ) -> ChartResult<DateTime<Utc>> {
        self.floor_naive(instant.naive_utc(), granularity)
            .map(|naive| naive.and_utc())
            .ok_or(ChartError::InstantOutOfRange {
                granularity,
                instant,
            })
    }

    fn offset(
        &self,
        boundary: DateTime<Utc>,
        granularity: Granularity,
        steps: i64,
    ) -> ChartResult<DateTime<Utc>> {
        let shifted = match granularity {
            Granularity::Auto => Some(boundary),
            Granularity::Second => shift_fixed(boundary, TimeDelta::try_seconds(steps)),
            Granularity::Minute => shift_fixed(boundary, TimeDelta::try_minutes(steps)),
            Granularity::Hour => shift_fixed(boundary, TimeDelta::try_hours(steps)),
            Granularity::Day => shift_fixed(boundary, TimeDelta::try_days(steps)),
            Granularity::Week => shift_fixed(boundary, TimeDelta::try_weeks(steps)),
            Granularity::Month => shift_months(boundary, steps, 1),
            Granularity::Quarter => shift_months(boundary, steps, 3),
            Granularity::Year => shift_months(boundary, steps, 12),
            Granularity::Decade => shift_months(boundary, steps, 120),
            Granularity::Century => shift_months(boundary, steps, 1200),
        };
        shifted.ok_or(ChartError::InstantOutOfRange {
            granularity,
            instant: boundary,
        })
    }
}

fn month_start(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

fn shift_fixed(boundary: DateTime<Utc>, delta: Option<TimeDelta>) -> Option<DateTime<Utc>> {
    boundary.checked_add_signed(delta?)
}

fn shift_months(
    boundary: DateTime<Utc>,
    steps: i64,
    months_per_step: i64,
) -> Option<DateTime<Utc>> {
    let total = steps.checked_mul(months_per_step)?;
    let months = Months::new(u32::try_from(total.unsigned_abs()).ok()?);
    if total >= 0 {
        boundary.checked_add_months(months)
    } else {
        boundary.checked_sub_months(months)
    }
}

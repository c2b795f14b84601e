pub mod calendar;
pub mod granularity;
pub mod rounding;
pub mod types;

pub use calendar::{CalendarBoundaries, UtcCalendar};
pub use granularity::{Granularity, RoundingMode};
pub use rounding::{IntervalRounder, align};
pub use types::{AxisDomain, BrushExtent};

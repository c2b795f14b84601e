//! Seams to the host chart.
//!
//! The binning core never draws, never owns filter representations and never
//! schedules data fetches itself. Hosts implement these traits on whatever
//! object wraps their brush, axis, crossfilter dimension and render loop.

use chrono::{DateTime, Utc};

use crate::core::{BrushExtent, Granularity};
use crate::error::ChartResult;

pub trait BrushProvider {
    /// Current brush selection, or `None` before the user has interacted.
    fn extent(&self) -> Option<BrushExtent>;
}

pub trait AxisDomainProvider {
    fn min(&self) -> DateTime<Utc>;
    fn max(&self) -> DateTime<Utc>;
}

/// Filter storage shared with the other charts of a filter group.
pub trait FilterCollaborator {
    type Filter;

    fn construct_range_filter(&self, lower: DateTime<Utc>, upper: DateTime<Utc>) -> Self::Filter;

    /// Replaces the chart's active filter; `None` clears it.
    fn replace_filter(&mut self, filter: Option<Self::Filter>) -> ChartResult<()>;

    /// Broadcasts the replaced filter to cooperating charts.
    fn commit_filter(&mut self) -> ChartResult<()>;
}

pub trait RenderCollaborator {
    /// Redraws every chart in the filter group.
    fn redraw_group(&mut self) -> ChartResult<()>;

    /// Schedules a data re-render without blocking the caller.
    fn render_async(&mut self) -> ChartResult<()>;
}

pub trait BinParamsProvider {
    /// Bin the data group actually resolved to while the chart is on `auto`.
    fn resolved_granularity(&self) -> Option<Granularity> {
        None
    }
}

/// Everything a binning chart needs from its host.
pub trait BinningHost:
    BrushProvider + AxisDomainProvider + FilterCollaborator + RenderCollaborator + BinParamsProvider
{
}

impl<T> BinningHost for T where
    T: BrushProvider
        + AxisDomainProvider
        + FilterCollaborator
        + RenderCollaborator
        + BinParamsProvider
{
}

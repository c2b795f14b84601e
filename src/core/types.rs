use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current brush selection reported by the rendering layer.
///
/// Ends are stored in ascending order regardless of drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushExtent {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BrushExtent {
    #[must_use]
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// A click without drag collapses the brush to a single instant.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Visible time domain of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDomain {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
}

impl AxisDomain {
    #[must_use]
    pub fn new(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn min(self) -> DateTime<Utc> {
        self.min
    }

    #[must_use]
    pub fn max(self) -> DateTime<Utc> {
        self.max
    }

    #[must_use]
    pub fn clamp(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        instant.clamp(self.min, self.max)
    }

    /// Clamps both ends of `extent` into the domain. Clamping is monotone,
    /// so the result stays ordered.
    #[must_use]
    pub fn clamp_extent(self, extent: BrushExtent) -> BrushExtent {
        BrushExtent::new(self.clamp(extent.start), self.clamp(extent.end))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::{AxisDomain, BrushExtent};

    fn ts(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).expect("valid ts")
    }

    #[test]
    fn brush_extent_orders_reversed_drag() {
        let extent = BrushExtent::new(ts(200), ts(100));
        assert_eq!(extent.start(), ts(100));
        assert_eq!(extent.end(), ts(200));
        assert!(!extent.is_empty());
        assert!(BrushExtent::new(ts(5), ts(5)).is_empty());
    }

    #[test]
    fn clamp_extent_keeps_inner_selection_and_trims_overhang() {
        let axis = AxisDomain::new(ts(100), ts(1_000));
        let inner = BrushExtent::new(ts(200), ts(300));
        assert_eq!(axis.clamp_extent(inner), inner);

        let overhang = BrushExtent::new(ts(50), ts(5_000));
        let clamped = axis.clamp_extent(overhang);
        assert_eq!(clamped.start(), ts(100));
        assert_eq!(clamped.end(), ts(1_000));
    }
}

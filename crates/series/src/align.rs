//! Re-indexing of a sparse series onto the unified date axis.

use serde::Serialize;

use crate::axis::UnifiedDateAxis;
use crate::observation::DateKey;
use crate::observation::Metric;
use crate::observation::RawObservation;

/// A point of a series aligned to the unified date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedPoint {
    /// The date of the point.
    pub x: DateKey,

    /// The plotted value; zero when the source had no entry for the date.
    pub y: f64,

    /// The eco points of the day; zero when absent.
    pub eco: f64,
}

impl AlignedPoint {
    fn zero(x: DateKey) -> AlignedPoint {
        Self {
            x,
            y: 0.0,
            eco: 0.0,
        }
    }
}

/// Aligns `series` to `axis`, emitting exactly one point per axis date.
///
/// Dates the series has no entry for are filled with a zero point: absence
/// means no activity, it is never interpolated. When a date occurs more
/// than once in `series` the first entry wins.
pub fn align_to_axis(
    axis: &UnifiedDateAxis,
    series: &[RawObservation],
    metric: Metric,
) -> Vec<AlignedPoint> {
    axis.iter()
        .map(|date| match series.iter().find(|o| &o.date == date) {
            Some(observation) => AlignedPoint {
                x: date.clone(),
                y: metric.value(observation),
                eco: observation.eco.unwrap_or_default(),
            },
            None => AlignedPoint::zero(date.clone()),
        })
        .collect()
}

//! The merge pipeline: select, align, filter.

use chrono::NaiveDate;

use crate::activity::ActivityData;
use crate::align::AlignedPoint;
use crate::align::align_to_axis;
use crate::axis::UnifiedDateAxis;
use crate::mode::MetricMode;
use crate::mode::SeriesPair;
use crate::range::RangeFilter;

/// A pair of co-indexed series ready to be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSeries {
    /// The user's aligned and filtered series.
    pub user: Vec<AlignedPoint>,

    /// The comparison series, aligned and filtered the same way.
    pub comparison: Vec<AlignedPoint>,

    /// The legend labels.
    pub labels: SeriesPair<&'static str>,

    /// The line colors.
    pub colors: SeriesPair<&'static str>,

    /// The area fill colors.
    pub fills: SeriesPair<&'static str>,
}

impl MergedSeries {
    /// Merges the series of `mode` onto their shared axis and applies
    /// `range` relative to `today`.
    ///
    /// The filter runs after alignment and on both series alike, so the
    /// two series keep the same length and the same dates.
    pub fn build(
        data: &ActivityData,
        mode: MetricMode,
        range: RangeFilter,
        today: NaiveDate,
    ) -> MergedSeries {
        let selection = mode.select(data);
        let axis = UnifiedDateAxis::build(selection.source, selection.comparison);

        let user = align_to_axis(&axis, selection.source, selection.metric);
        let comparison = align_to_axis(&axis, selection.comparison, selection.metric);

        Self {
            user: range.apply(user, today),
            comparison: range.apply(comparison, today),
            labels: selection.labels,
            colors: selection.colors,
            fills: selection.fills,
        }
    }

    /// Returns the dates of the merged series.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.user.iter().map(|p| p.x.as_str())
    }
}

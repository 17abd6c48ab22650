//! The shared date axis of a pair of series.

use std::collections::BTreeSet;

use crate::observation::DateKey;
use crate::observation::RawObservation;

/// The sorted, deduplicated union of the dates of two series.
///
/// Both series of a chart are re-indexed onto this axis so that they have
/// the same length and the same x positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedDateAxis {
    dates: Vec<DateKey>,
}

impl UnifiedDateAxis {
    /// Builds the axis from every date found in `first` and `second`.
    pub fn build(first: &[RawObservation], second: &[RawObservation]) -> UnifiedDateAxis {
        let dates: BTreeSet<&DateKey> = first
            .iter()
            .chain(second)
            .map(|observation| &observation.date)
            .collect();

        Self {
            dates: dates.into_iter().cloned().collect(),
        }
    }

    /// Returns the number of dates on the axis.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if neither series had any dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns an iterator over the dates in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, DateKey> {
        self.dates.iter()
    }

    /// Returns the dates in ascending order.
    pub fn as_slice(&self) -> &[DateKey] {
        &self.dates
    }
}

impl<'a> IntoIterator for &'a UnifiedDateAxis {
    type Item = &'a DateKey;

    type IntoIter = std::slice::Iter<'a, DateKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

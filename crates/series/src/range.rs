//! The "last N days" filter applied to aligned series.

use std::fmt::Display;
use std::str::FromStr;

use chrono::Local;
use chrono::NaiveDate;
use chrono::TimeDelta;

use crate::align::AlignedPoint;
use crate::error::SeriesError;

/// Which aligned points of a series are kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeFilter {
    /// Keep every point.
    #[default]
    All,

    /// Keep the points dated within the last `N` days of today.
    ///
    /// Zero or a negative count moves the cutoff to today or into the
    /// future, which leaves little or nothing to display.
    LastDays(i64),
}

impl RangeFilter {
    const ALL: &str = "all";

    /// Applies the filter relative to the given calendar day.
    ///
    /// Points whose date cannot be read as `YYYY-MM-DD` never satisfy a
    /// day-count filter.
    pub fn apply(&self, mut points: Vec<AlignedPoint>, today: NaiveDate) -> Vec<AlignedPoint> {
        let RangeFilter::LastDays(days) = *self else {
            return points;
        };

        let cutoff = TimeDelta::try_days(days).and_then(|delta| today.checked_sub_signed(delta));

        match cutoff {
            Some(cutoff) => points.retain(|p| p.x.to_date().is_some_and(|date| date >= cutoff)),
            // The cutoff lies past the representable calendar.
            None if days > 0 => points.retain(|p| p.x.to_date().is_some()),
            None => points.clear(),
        }

        points
    }

    /// Applies the filter relative to today's date on the local clock.
    pub fn apply_local(&self, points: Vec<AlignedPoint>) -> Vec<AlignedPoint> {
        self.apply(points, Local::now().date_naive())
    }
}

impl FromStr for RangeFilter {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if value == Self::ALL {
            return Ok(RangeFilter::All);
        }

        value
            .parse::<i64>()
            .map(RangeFilter::LastDays)
            .map_err(|_| SeriesError::InvalidRange(s.to_owned()))
    }
}

impl Display for RangeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeFilter::All => f.write_str(Self::ALL),
            RangeFilter::LastDays(days) => write!(f, "{days}"),
        }
    }
}

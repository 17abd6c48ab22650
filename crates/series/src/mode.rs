//! Mapping of the selected metric mode to series, field, labels and colors.

use std::fmt::Display;
use std::str::FromStr;

use crate::activity::ActivityData;
use crate::error::SeriesError;
use crate::observation::Metric;
use crate::observation::RawObservation;

/// The activity shown on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricMode {
    /// Walking, measured in steps.
    #[default]
    Steps,

    /// Cycling, measured in distance.
    Cycling,
}

/// A value for each of the two plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesPair<T> {
    /// The value for the user's own series.
    pub user: T,

    /// The value for the comparison (average) series.
    pub comparison: T,
}

/// Everything the chart needs to know about a metric mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeSelection<'a> {
    /// The user's raw series.
    pub source: &'a [RawObservation],

    /// The comparison series.
    pub comparison: &'a [RawObservation],

    /// The field plotted on the y axis.
    pub metric: Metric,

    /// The legend labels.
    pub labels: SeriesPair<&'static str>,

    /// The line colors.
    pub colors: SeriesPair<&'static str>,

    /// The translucent area fill colors.
    pub fills: SeriesPair<&'static str>,
}

impl MetricMode {
    const STEPS: &str = "steps";
    const CYCLING: &str = "cycling";

    /// Picks the series and display settings for this mode out of `data`.
    pub fn select<'a>(&self, data: &'a ActivityData) -> ModeSelection<'a> {
        match self {
            MetricMode::Steps => ModeSelection {
                source: &data.walking,
                comparison: &data.avg_walking,
                metric: Metric::Steps,
                labels: SeriesPair {
                    user: "Your Steps",
                    comparison: "Average Steps",
                },
                colors: SeriesPair {
                    user: "#3b82f6",
                    comparison: "#f59e0b",
                },
                fills: SeriesPair {
                    user: "rgba(59, 130, 246, 0.1)",
                    comparison: "rgba(245, 158, 11, 0.1)",
                },
            },
            MetricMode::Cycling => ModeSelection {
                source: &data.cycling,
                comparison: &data.avg_cycling,
                metric: Metric::Distance,
                labels: SeriesPair {
                    user: "Your Cycling Distance",
                    comparison: "Average Cycling Distance",
                },
                colors: SeriesPair {
                    user: "#10b981",
                    comparison: "#6b7280",
                },
                fills: SeriesPair {
                    user: "rgba(16, 185, 129, 0.1)",
                    comparison: "rgba(107, 114, 128, 0.1)",
                },
            },
        }
    }
}

impl FromStr for MetricMode {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            Self::STEPS => Ok(MetricMode::Steps),
            Self::CYCLING => Ok(MetricMode::Cycling),
            _ => Err(SeriesError::UnknownMetricMode(s.to_owned())),
        }
    }
}

impl Display for MetricMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricMode::Steps => f.write_str(Self::STEPS),
            MetricMode::Cycling => f.write_str(Self::CYCLING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ActivityData {
        ActivityData {
            walking: vec![RawObservation::steps("2024-01-01", 1.0)],
            cycling: vec![RawObservation::distance("2024-01-02", 2.0)],
            avg_walking: vec![RawObservation::steps("2024-01-03", 3.0)],
            avg_cycling: vec![RawObservation::distance("2024-01-04", 4.0)],
        }
    }

    #[test]
    fn steps_selects_walking_series() {
        let data = data();
        let selection = MetricMode::Steps.select(&data);

        assert_eq!(selection.source, data.walking.as_slice());
        assert_eq!(selection.comparison, data.avg_walking.as_slice());
        assert_eq!(selection.metric, Metric::Steps);
        assert_eq!(selection.labels.user, "Your Steps");
        assert_eq!(selection.colors.comparison, "#f59e0b");
    }

    #[test]
    fn cycling_selects_distance_series() {
        let data = data();
        let selection = MetricMode::Cycling.select(&data);

        assert_eq!(selection.source, data.cycling.as_slice());
        assert_eq!(selection.comparison, data.avg_cycling.as_slice());
        assert_eq!(selection.metric, Metric::Distance);
        assert_eq!(selection.labels.comparison, "Average Cycling Distance");
        assert_eq!(selection.colors.user, "#10b981");
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert_eq!("steps".parse::<MetricMode>(), Ok(MetricMode::Steps));
        assert_eq!("cycling".parse::<MetricMode>(), Ok(MetricMode::Cycling));
        assert_eq!(
            "swimming".parse::<MetricMode>(),
            Err(SeriesError::UnknownMetricMode(String::from("swimming")))
        );
    }
}

//! Raw per-day observations and the date key that joins them.

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

/// The canonical `YYYY-MM-DD` form of a calendar date.
///
/// Keys are compared as strings, which orders them chronologically only
/// as long as every key uses the same fixed-width format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    const FORMAT: &str = "%Y-%m-%d";

    /// Creates a key from its string form without validating it.
    pub fn new(key: impl Into<String>) -> DateKey {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key as a calendar date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, Self::FORMAT).ok()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entity's measurement for one day.
///
/// Walking entries carry `steps`, cycling entries carry `distance`; both
/// may carry the `eco` points earned that day. Averages carry the metric
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// The day of the measurement.
    pub date: DateKey,

    /// The number of steps walked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,

    /// The cycled distance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// The eco points earned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eco: Option<f64>,
}

impl RawObservation {
    /// Creates a walking observation.
    pub fn steps(date: impl Into<String>, steps: f64) -> RawObservation {
        Self {
            date: DateKey::new(date),
            steps: Some(steps),
            distance: None,
            eco: None,
        }
    }

    /// Creates a cycling observation.
    pub fn distance(date: impl Into<String>, distance: f64) -> RawObservation {
        Self {
            date: DateKey::new(date),
            steps: None,
            distance: Some(distance),
            eco: None,
        }
    }

    /// Sets the eco points earned on the observed day.
    pub fn with_eco(mut self, eco: f64) -> RawObservation {
        self.eco = Some(eco);
        self
    }
}

/// Selects which numeric field of an observation is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// The `steps` field.
    Steps,

    /// The `distance` field.
    Distance,
}

impl Metric {
    /// Reads the selected field, treating a missing field as zero.
    #[inline]
    pub fn value(self, observation: &RawObservation) -> f64 {
        let value = match self {
            Metric::Steps => observation.steps,
            Metric::Distance => observation.distance,
        };

        value.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_from_date_uses_fixed_width_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let key = DateKey::from(date);

        assert_eq!(key.as_str(), "2024-03-07");
        assert_eq!(key.to_date(), Some(date));
    }

    #[test]
    fn date_key_with_garbage_does_not_parse() {
        assert_eq!(DateKey::new("yesterday").to_date(), None);
    }

    #[test]
    fn deserialize_walking_and_average_entries() {
        let walking: RawObservation =
            serde_json::from_str(r#"{"date": "2024-01-01", "steps": 1200, "eco": 2.5}"#).unwrap();
        let average: RawObservation =
            serde_json::from_str(r#"{"date": "2024-01-01", "steps": 980.25}"#).unwrap();

        let expected = RawObservation::steps("2024-01-01", 1200.0).with_eco(2.5);

        assert_eq!(walking, expected);
        assert_eq!(average.eco, None);
        assert_eq!(Metric::Steps.value(&average), 980.25);
    }

    #[test]
    fn missing_metric_reads_as_zero() {
        let cycling = RawObservation::distance("2024-01-01", 12.5);

        assert_eq!(Metric::Steps.value(&cycling), 0.0);
        assert_eq!(Metric::Distance.value(&cycling), 12.5);
    }
}

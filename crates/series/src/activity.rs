//! The activity series embedded in the dashboard page.

use log::warn;

use crate::observation::RawObservation;

/// The four activity series the dashboard is loaded with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityData {
    /// The user's walking entries.
    pub walking: Vec<RawObservation>,

    /// The user's cycling entries.
    pub cycling: Vec<RawObservation>,

    /// The per-day average steps of all users.
    pub avg_walking: Vec<RawObservation>,

    /// The per-day average cycling distance of all users.
    pub avg_cycling: Vec<RawObservation>,
}

/// Parses a JSON array of observations.
///
/// A missing, blank or malformed blob yields an empty series so that a
/// broken feed never prevents the rest of the dashboard from loading.
pub fn parse_series(name: &str, blob: Option<&str>) -> Vec<RawObservation> {
    let Some(blob) = blob.map(str::trim).filter(|b| !b.is_empty()) else {
        warn!("The {name} series is missing; using an empty series.");
        return Vec::new();
    };

    match serde_json::from_str(blob) {
        Ok(series) => series,
        Err(error) => {
            warn!("The {name} series is malformed ({error}); using an empty series.");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_valid_series() {
        let blob = r#"[
            {"date": "2024-01-01", "steps": 10, "eco": 0.5},
            {"date": "2024-01-02", "steps": 20}
        ]"#;

        let series = parse_series("walking", Some(blob));

        assert_eq!(
            series,
            vec![
                RawObservation::steps("2024-01-01", 10.0).with_eco(0.5),
                RawObservation::steps("2024-01-02", 20.0),
            ]
        );
    }

    #[test]
    fn missing_blank_and_malformed_blobs_are_empty() {
        assert!(parse_series("walking", None).is_empty());
        assert!(parse_series("walking", Some("   ")).is_empty());
        assert!(parse_series("walking", Some("[{\"date\": ")).is_empty());
        let object = r#"{"date": "2024-01-01"}"#;

        assert!(parse_series("walking", Some(object)).is_empty());
    }
}

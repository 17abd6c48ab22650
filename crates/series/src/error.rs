//! Defines the error type that this crate uses.

use std::error::Error;
use std::fmt::Display;

/// The error type for selecting and filtering activity series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The metric mode is not one of the known modes.
    UnknownMetricMode(String),

    /// The range value is neither `all` nor an integer number of days.
    InvalidRange(String),
}

impl Error for SeriesError {}

impl Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let series_error = "series error:";

        match self {
            SeriesError::UnknownMetricMode(mode) => write!(
                f,
                "{series_error} unknown metric mode \"{mode}\"; expected \"steps\" or \"cycling\""
            ),
            SeriesError::InvalidRange(range) => write!(
                f,
                "{series_error} invalid range \"{range}\"; expected \"all\" or a number of days"
            ),
        }
    }
}

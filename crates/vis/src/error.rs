//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use serde_json::Error as JsonError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for rendering charts.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while writing the page.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// the page template.
    TemplateError(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing traces
    /// or the layout of a chart.
    Json(JsonError),
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::TemplateError(error) => Some(error),
            VisError::Json(error) => Some(error),
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::TemplateError(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} JSON serialization error: {error}"),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::TemplateError(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<JsonError> for VisError {
    fn from(error: JsonError) -> Self {
        VisError::Json(error)
    }
}

//! Plotly traces.

use ecodash_series::align::AlignedPoint;
use serde::Serialize;
use serde_json::Value;

use crate::chart::tooltip::hover_text;

/// A single data series of a chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Trace {
    /// A trace built from local data.
    Series(SeriesTrace),

    /// A trace received from the backend, passed to Plotly as is.
    Passthrough(Value),
}

impl From<SeriesTrace> for Trace {
    fn from(trace: SeriesTrace) -> Self {
        Trace::Series(trace)
    }
}

/// A scatter or bar trace over string-labelled x values.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SeriesTrace {
    #[serde(rename = "type")]
    kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    name: String,
    x: Vec<String>,
    y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Vec<String>>,
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    hover_info: Option<HoverInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill: Option<Fill>,
    #[serde(rename = "fillcolor", skip_serializing_if = "Option::is_none")]
    fill_color: Option<String>,
}

impl SeriesTrace {
    /// Creates a smoothed line over aligned activity points.
    ///
    /// Every point gets a hover label, see [`hover_text`].
    pub fn line(name: impl Into<String>, points: &[AlignedPoint]) -> SeriesTrace {
        let name = name.into();
        let x = points.iter().map(|p| p.x.to_string()).collect();
        let y = points.iter().map(|p| p.y).collect();
        let text = points
            .iter()
            .map(|p| hover_text(&name, p.y, p.eco))
            .collect();

        Self {
            kind: TraceKind::Scatter,
            mode: Some(Mode::LinesMarkers),
            name,
            x,
            y,
            text: Some(text),
            hover_info: Some(HoverInfo::Text),
            line: Some(Line::spline()),
            marker: Some(Marker::sized(10)),
            fill: None,
            fill_color: None,
        }
    }

    /// Creates a bar trace. Extra labels or values are dropped so that
    /// `x` and `y` have the same length.
    pub fn bar(name: impl Into<String>, mut x: Vec<String>, mut y: Vec<f64>) -> SeriesTrace {
        let len = x.len().min(y.len());
        x.truncate(len);
        y.truncate(len);

        Self {
            kind: TraceKind::Bar,
            mode: None,
            name: name.into(),
            x,
            y,
            text: None,
            hover_info: None,
            line: None,
            marker: None,
            fill: None,
            fill_color: None,
        }
    }

    /// Sets the line color of a scatter trace or the bar color of a bar trace.
    pub fn color(mut self, color: impl Into<String>) -> SeriesTrace {
        let color = color.into();

        match self.kind {
            TraceKind::Scatter => {
                let line = self.line.get_or_insert_with(Line::default);
                line.color = Some(color.clone());

                if let Some(ref mut marker) = self.marker {
                    marker.color = Some(color);
                }
            }
            TraceKind::Bar => {
                self.marker.get_or_insert_with(Marker::default).color = Some(color);
            }
        }

        self
    }

    /// Fills the area between the trace and zero.
    pub fn fill_to_zero(mut self, color: impl Into<String>) -> SeriesTrace {
        self.fill = Some(Fill::Tozeroy);
        self.fill_color = Some(color.into());
        self
    }

    /// The name shown in the legend.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The x values.
    pub fn x(&self) -> &[String] {
        &self.x
    }

    /// The y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The hover labels, if any.
    pub fn text(&self) -> Option<&[String]> {
        self.text.as_deref()
    }
}

/// The Plotly trace type.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// Lines and markers.
    #[default]
    Scatter,

    /// Bars.
    Bar,
}

/// The drawing mode of a scatter trace.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Lines with a marker on each point.
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// The area fill of a scatter trace.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Fill down to `y = 0`.
    #[default]
    Tozeroy,
}

/// What the hover label shows.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HoverInfo {
    /// The `text` of the point.
    #[default]
    Text,
}

/// The line style of a scatter trace.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shape: Option<LineShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    smoothing: Option<f64>,
}

impl Line {
    fn spline() -> Line {
        Self {
            color: None,
            shape: Some(LineShape::Spline),
            smoothing: Some(0.4),
        }
    }
}

/// The interpolation between two points of a line.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    /// Smoothed curves.
    Spline,
}

/// The marker style of a trace.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u32>,
}

impl Marker {
    fn sized(size: u32) -> Marker {
        Self {
            color: None,
            size: Some(size),
        }
    }
}

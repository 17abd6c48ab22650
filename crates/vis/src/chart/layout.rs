//! Plotly layout options.

use serde::Serialize;

/// The layout of a chart: title, axes, legend and hover behaviour.
///
/// Options that are not set are left out of the serialized layout so that
/// Plotly falls back to its own defaults.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    x_axis: Option<Axis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    y_axis: Option<Axis>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<Legend>,
    #[serde(rename = "barmode", skip_serializing_if = "Option::is_none")]
    bar_mode: Option<BarMode>,
    #[serde(rename = "hovermode", skip_serializing_if = "Option::is_none")]
    hover_mode: Option<HoverMode>,
    #[serde(rename = "autosize", skip_serializing_if = "Option::is_none")]
    auto_size: Option<bool>,
}

impl Layout {
    /// Creates a layout with a chart title.
    pub fn titled(text: impl Into<String>) -> Layout {
        Self {
            title: Some(Title::new(text)),
            ..Self::default()
        }
    }

    /// Sets the x axis options.
    pub fn x_axis(mut self, axis: Axis) -> Layout {
        self.x_axis = Some(axis);
        self
    }

    /// Sets the y axis options.
    pub fn y_axis(mut self, axis: Axis) -> Layout {
        self.y_axis = Some(axis);
        self
    }

    /// Shows the legend.
    pub fn with_legend(mut self) -> Layout {
        self.show_legend = Some(true);
        self
    }

    /// Shows the legend as a horizontal row above the plot.
    pub fn with_legend_on_top(mut self) -> Layout {
        self.show_legend = Some(true);
        self.legend = Some(Legend {
            orientation: Orientation::Horizontal,
            y: 1.1,
        });
        self
    }

    /// Places bars of the same x value next to each other.
    pub fn grouped_bars(mut self) -> Layout {
        self.bar_mode = Some(BarMode::Group);
        self
    }

    /// Sets how points are picked for the hover label.
    pub fn hover_mode(mut self, mode: HoverMode) -> Layout {
        self.hover_mode = Some(mode);
        self
    }

    /// Resizes the chart with its container.
    pub fn auto_size(mut self) -> Layout {
        self.auto_size = Some(true);
        self
    }
}

/// A title of a chart or an axis.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Title {
    text: String,
}

impl Title {
    /// Creates a title.
    pub fn new(text: impl Into<String>) -> Title {
        Self { text: text.into() }
    }
}

/// The options of one axis.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Title>,
    #[serde(rename = "rangemode", skip_serializing_if = "Option::is_none")]
    range_mode: Option<RangeMode>,
    #[serde(rename = "showgrid", skip_serializing_if = "Option::is_none")]
    show_grid: Option<bool>,
    #[serde(rename = "gridcolor", skip_serializing_if = "Option::is_none")]
    grid_color: Option<String>,
}

impl Axis {
    /// Creates an axis with a title.
    pub fn titled(text: impl Into<String>) -> Axis {
        Self {
            title: Some(Title::new(text)),
            ..Self::default()
        }
    }

    /// Makes the axis range always include zero.
    pub fn from_zero(mut self) -> Axis {
        self.range_mode = Some(RangeMode::Tozero);
        self
    }

    /// Hides the grid lines.
    pub fn without_grid(mut self) -> Axis {
        self.show_grid = Some(false);
        self
    }

    /// Sets the grid line color.
    pub fn grid_color(mut self, color: impl Into<String>) -> Axis {
        self.grid_color = Some(color.into());
        self
    }
}

/// How the range of an axis is computed.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// From the data, extended to include zero.
    Tozero,
}

/// The placement of the legend.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Legend {
    orientation: Orientation,
    y: f64,
}

/// The direction legend entries are laid out in.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side.
    #[serde(rename = "h")]
    Horizontal,
}

/// How bars sharing an x value are drawn.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    /// Next to each other.
    Group,
}

/// Which points the hover label describes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    /// Every trace's point at the hovered x value.
    #[serde(rename = "x unified")]
    XUnified,
}

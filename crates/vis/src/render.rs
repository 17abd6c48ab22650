//! Render sinks and the streams they write to.

pub mod output;
pub mod page;

use crate::chart::Chart;
use crate::error::Result;

/// A destination for charts, in the manner of `Plotly.newPlot`.
///
/// Plotting into a mount point replaces whatever was plotted there before.
pub trait RenderSink {
    /// Plots `chart` into its mount point.
    fn new_plot(&mut self, chart: &Chart) -> Result<()>;
}

/// A stream the rendered page is written to.
pub trait OutputStream {
    /// Appends `data` to the stream.
    fn write(&mut self, data: &str) -> Result<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

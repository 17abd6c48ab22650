//! The HTML page sink.

use log::debug;

use crate::chart::Chart;
use crate::error::Result;
use crate::render::OutputStream;
use crate::render::RenderSink;
use crate::template::PageContext;
use crate::template::TemplateEngine;

/// A page holding one chart per mount point.
///
/// Charts keep the order in which their mount points were first plotted.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    title: String,
    charts: Vec<Chart>,
}

impl HtmlPage {
    /// Creates an empty page.
    pub fn new(title: impl Into<String>) -> HtmlPage {
        Self {
            title: title.into(),
            charts: Vec::new(),
        }
    }

    /// Returns the chart plotted into `mount`, if any.
    pub fn chart(&self, mount: &str) -> Option<&Chart> {
        self.charts.iter().find(|chart| chart.mount() == mount)
    }

    /// Returns the plotted charts.
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    /// Renders the page into `output`.
    pub fn write<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let engine = TemplateEngine::new()?;
        let context = PageContext::new(&self.title, &self.charts)?;
        let text = engine.render(&context)?;

        output.write(&text)
    }
}

impl RenderSink for HtmlPage {
    fn new_plot(&mut self, chart: &Chart) -> Result<()> {
        debug!(
            "Plotting {count} trace(s) into `{mount}`.",
            count = chart.traces().len(),
            mount = chart.mount()
        );

        match self.charts.iter_mut().find(|c| c.mount() == chart.mount()) {
            Some(existing) => *existing = chart.clone(),
            None => self.charts.push(chart.clone()),
        }

        Ok(())
    }
}

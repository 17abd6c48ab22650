//! The chart model handed to a render sink.

pub mod layout;
pub mod tooltip;
pub mod trace;

use serde::Serialize;

use crate::chart::layout::Layout;
use crate::chart::trace::Trace;

/// A plot bound to a mount point of the page.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chart {
    mount: String,
    traces: Vec<Trace>,
    layout: Layout,
}

impl Chart {
    /// Creates a chart rendered into the element with the `mount` id.
    pub fn new(mount: impl Into<String>, traces: Vec<Trace>, layout: Layout) -> Chart {
        Self {
            mount: mount.into(),
            traces,
            layout,
        }
    }

    /// The id of the element the chart is rendered into.
    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// The plotted traces.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// The layout options.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

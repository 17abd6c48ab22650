//! ecodash's visualization library.
//!
//! Charts are described with a small Plotly trace and layout model and
//! handed to a [`render::RenderSink`]. The [`render::page::HtmlPage`] sink
//! keeps one plot per mount point and writes them out as a single HTML page.
//!
//! **WARNING**: This library is ecodash's internal visualization library and
//! there are no plans to stabilize it. The API may break at any time without notice.

#![warn(missing_docs)]

pub(crate) mod template;

pub mod chart;
pub mod error;
pub mod render;

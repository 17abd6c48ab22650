use std::path::Path;

use ecodash_vis::render::OutputStream;
use ecodash_vis::render::output::OutputFile;
use ecodash_vis::render::page::HtmlPage;
use log::info;

use crate::error::CliError;

pub(crate) const PAGE_TITLE: &str = "ecodash";

/// Writes `page` as `index.html` into `dir`.
///
/// The page is rendered before the file is touched, so a rendering error
/// leaves the previously written page in place.
pub(crate) fn write_page(page: &HtmlPage, dir: &Path) -> Result<(), CliError> {
    let mut html = String::new();
    page.write(&mut html)?;

    let mut output = OutputFile::create(dir)?;
    output.write(&html)?;

    info!(
        "ecodash wrote {count} chart(s) to `{path}`",
        count = page.charts().len(),
        path = output.path().display()
    );

    Ok(())
}

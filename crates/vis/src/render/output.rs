//! File output of the rendered page.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::render::OutputStream;

/// The `index.html` file of an output directory.
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    const FILE_NAME: &str = "index.html";

    /// Creates or truncates `index.html` in the `dir` directory.
    pub fn create(dir: &Path) -> Result<OutputFile> {
        let path = dir.join(Self::FILE_NAME);
        let file = File::create(&path)?;

        Ok(Self { path, file })
    }

    /// The path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}

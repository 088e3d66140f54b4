//! Page rendering.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::ComposedTemplate;
use crate::error::PageError;
use crate::registry::PageConfig;

/// Renders composed pages into the output directory.
#[derive(Debug, Clone)]
pub struct Renderer {
    output_dir: PathBuf,
}

impl Renderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output path for a page identifier.
    pub fn output_path(&self, identifier: &str) -> PathBuf {
        self.output_dir.join(format!("{identifier}.html"))
    }

    /// Render a page and write it to `<output>/<identifier>.html`.
    ///
    /// The page is rendered fully before the file is touched, so a failed
    /// render leaves any previous output in place.
    pub fn render(
        &self,
        template: &ComposedTemplate,
        config: &PageConfig,
    ) -> Result<PathBuf, PageError> {
        let html = template.render(config).map_err(PageError::Render)?;

        let path = self.output_path(&config.identifier);
        write_output(&path, &html)?;

        Ok(path)
    }
}

fn write_output(path: &Path, html: &str) -> Result<(), PageError> {
    fs::write(path, html).map_err(|source| PageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

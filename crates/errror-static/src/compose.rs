//! Template composition.
//!
//! The base layout is parsed once per build. Every page gets its own clone of
//! that environment with the page template and its component templates added,
//! so templates registered for one page are never visible to another.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;

use crate::discover::{DiscoveredPage, PAGE_EXTENSION};
use crate::error::{BuildError, PageError};

/// Name of the base layout, the entry point of every render.
pub const BASE_TEMPLATE: &str = "base.html";

/// Name the page template is registered under. The base layout pulls it in
/// with `{% include "page.html" %}`.
pub const PAGE_TEMPLATE: &str = "page.html";

/// The shared base layout.
#[derive(Debug, Clone)]
pub struct BaseLayout {
    env: Environment<'static>,
}

impl BaseLayout {
    /// Load and parse the base layout from disk.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let source = fs::read_to_string(path).map_err(|source| BuildError::ReadBaseTemplate {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_source(source).map_err(BuildError::ParseBaseTemplate)
    }

    /// Parse the base layout from a string.
    pub fn from_source(source: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template_owned(BASE_TEMPLATE, source.into())?;

        Ok(Self { env })
    }

    /// Compose the template set for one page.
    pub fn compose(&self, page: &DiscoveredPage) -> Result<ComposedTemplate, PageError> {
        let mut env = self.env.clone();

        let source = read_template(&page.template_path)?;
        add_template(&mut env, PAGE_TEMPLATE.to_string(), source)?;

        let mut components = 0;
        if page.components_dir.is_dir() {
            for path in component_files(&page.components_dir)? {
                let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let name = format!("{}/{}", page.identifier(), file_name);
                let source = read_template(&path)?;
                add_template(&mut env, name, source)?;
                components += 1;
            }

            if components > 0 {
                tracing::info!(
                    "Added {} component templates for {}",
                    components,
                    page.identifier()
                );
            }
        }

        Ok(ComposedTemplate { env, components })
    }
}

/// A base layout merged with one page's templates.
#[derive(Debug)]
pub struct ComposedTemplate {
    env: Environment<'static>,
    components: usize,
}

impl ComposedTemplate {
    /// Number of component templates merged in.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Render the base layout with the given data context.
    pub fn render<S: serde::Serialize>(&self, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(BASE_TEMPLATE)?.render(ctx)
    }
}

fn read_template(path: &Path) -> Result<String, PageError> {
    if !path.is_file() {
        return Err(PageError::MissingTemplate(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| PageError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })
}

fn add_template(
    env: &mut Environment<'static>,
    name: String,
    source: String,
) -> Result<(), PageError> {
    env.add_template_owned(name.clone(), source)
        .map_err(|source| PageError::ParseTemplate { name, source })
}

/// Component template files in `dir`, sorted by name.
fn component_files(dir: &Path) -> Result<Vec<PathBuf>, PageError> {
    let read_error = |source| PageError::ReadComponents {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(PAGE_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

//! Build failures, split by how far they reach.
//!
//! [`BuildError`] stops the whole run. [`PageError`] only skips the page it
//! belongs to; the builder logs it and moves on to the next page.

use std::io;
use std::path::PathBuf;

/// Errors that abort the build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("Failed to read pages directory {path}: {source}")]
    ReadPages { path: PathBuf, source: io::Error },

    #[error("Failed to read base template {path}: {source}")]
    ReadBaseTemplate { path: PathBuf, source: io::Error },

    #[error("Failed to parse base template: {0}")]
    ParseBaseTemplate(#[source] minijinja::Error),
}

/// Errors that skip a single page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page template not found: {0}")]
    MissingTemplate(PathBuf),

    #[error("Failed to read template {path}: {source}")]
    ReadTemplate { path: PathBuf, source: io::Error },

    #[error("Failed to read component directory {path}: {source}")]
    ReadComponents { path: PathBuf, source: io::Error },

    #[error("Failed to parse template {name}: {source}")]
    ParseTemplate {
        name: String,
        source: minijinja::Error,
    },

    #[error("Failed to render template: {0}")]
    Render(#[source] minijinja::Error),

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

//! Page discovery.
//!
//! Scans the pages directory and keeps the templates that have a registry
//! entry. Everything else is reported and left out of the build.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::registry::{PageConfig, PageRegistry};

/// File extension recognized as a page template.
pub const PAGE_EXTENSION: &str = "html";

/// A registered page whose template exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPage {
    /// Registry entry for the page
    pub config: PageConfig,

    /// Page template file
    pub template_path: PathBuf,

    /// Directory that may hold the page's component templates
    pub components_dir: PathBuf,
}

impl DiscoveredPage {
    pub fn identifier(&self) -> &str {
        &self.config.identifier
    }
}

/// Result of scanning the pages directory.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Registered pages, sorted by identifier
    pub pages: Vec<DiscoveredPage>,

    /// Identifiers of page templates with no registry entry, sorted
    pub unregistered: Vec<String>,
}

/// Discover all registered page templates in `pages_dir`.
///
/// Only the top level is scanned; subdirectories hold component templates.
pub fn discover_pages(pages_dir: &Path, registry: &PageRegistry) -> Result<Discovery, BuildError> {
    let read_error = |source| BuildError::ReadPages {
        path: pages_dir.to_path_buf(),
        source,
    };

    let mut discovery = Discovery::default();

    for entry in fs::read_dir(pages_dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(PAGE_EXTENSION) {
            continue;
        }

        let Some(identifier) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping page with non UTF-8 name: {}", path.display());
            continue;
        };

        match registry.get(identifier) {
            Some(config) => {
                tracing::info!("Discovered page: {}", identifier);
                discovery.pages.push(DiscoveredPage {
                    config: config.clone(),
                    components_dir: pages_dir.join(identifier),
                    template_path: path.clone(),
                });
            }
            None => {
                tracing::warn!("No configuration found for page {}", identifier);
                discovery.unregistered.push(identifier.to_string());
            }
        }
    }

    // read_dir order is platform dependent
    discovery
        .pages
        .sort_by(|a, b| a.config.identifier.cmp(&b.config.identifier));
    discovery.unregistered.sort();

    Ok(discovery)
}

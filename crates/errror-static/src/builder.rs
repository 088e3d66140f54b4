//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::assets::{copy_assets, AssetError};
use crate::compose::BaseLayout;
use crate::discover::{discover_pages, DiscoveredPage};
use crate::error::{BuildError, PageError};
use crate::registry::PageRegistry;
use crate::render::Renderer;

/// Configuration for building the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Shared base layout
    pub base_template: PathBuf,

    /// Directory of page templates
    pub pages_dir: PathBuf,

    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_template: PathBuf::from("templates/base.html"),
            pages_dir: PathBuf::from("templates/pages"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// A page that was discovered but could not be built.
#[derive(Debug)]
pub struct SkippedPage {
    pub identifier: String,
    pub error: PageError,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Written page files, in build order
    pub built: Vec<PathBuf>,

    /// Pages that failed to compose or render
    pub skipped: Vec<SkippedPage>,

    /// Page templates with no registry entry
    pub unregistered: Vec<String>,

    /// Number of asset files copied, or the error that stopped the copy
    pub assets: Result<usize, AssetError>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl BuildResult {
    /// Whether every discovered page was built and the assets were copied.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.assets.is_ok()
    }
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    registry: PageRegistry,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, registry: PageRegistry) -> Self {
        Self { config, registry }
    }

    /// Build the site.
    ///
    /// Only [`BuildError`]s end the build early. A page that fails is logged
    /// and recorded in [`BuildResult::skipped`]; an asset copy failure is
    /// recorded in [`BuildResult::assets`].
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir).map_err(|source| {
            BuildError::CreateOutput {
                path: self.config.output_dir.clone(),
                source,
            }
        })?;

        let discovery = discover_pages(&self.config.pages_dir, &self.registry)?;
        let base = BaseLayout::load(&self.config.base_template)?;
        let renderer = Renderer::new(&self.config.output_dir);

        let mut built = Vec::new();
        let mut skipped = Vec::new();

        for page in &discovery.pages {
            match self.build_page(&base, &renderer, page) {
                Ok(path) => {
                    tracing::info!("Built {}", path.display());
                    built.push(path);
                }
                Err(error) => {
                    tracing::error!("Skipping page {}: {}", page.identifier(), error);
                    skipped.push(SkippedPage {
                        identifier: page.identifier().to_string(),
                        error,
                    });
                }
            }
        }

        let assets = self.copy_static_assets();

        Ok(BuildResult {
            built,
            skipped,
            unregistered: discovery.unregistered,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Compose and render a single page.
    fn build_page(
        &self,
        base: &BaseLayout,
        renderer: &Renderer,
        page: &DiscoveredPage,
    ) -> Result<PathBuf, PageError> {
        let template = base.compose(page)?;
        renderer.render(&template, &page.config)
    }

    /// Copy the static directory, if there is one.
    fn copy_static_assets(&self) -> Result<usize, AssetError> {
        let static_dir = &self.config.static_dir;

        if !static_dir.exists() {
            tracing::warn!("Static directory not found: {}", static_dir.display());
            return Ok(0);
        }

        let result = copy_assets(static_dir, &self.config.output_dir);
        match &result {
            Ok(count) => tracing::info!("Copied {} static assets", count),
            Err(e) => tracing::error!("Failed to copy static assets: {}", e),
        }
        result
    }
}

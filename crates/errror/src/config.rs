//! Site configuration (site.toml).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use errror_server::PreviewConfig;
use errror_static::{BuildConfig, PageConfig, PageRegistry};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    build: BuildSettings,
    #[serde(default)]
    server: ServerSettings,
    /// Page registry; replaces the built-in pages when non-empty
    #[serde(default)]
    pages: BTreeMap<String, PageSettings>,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default = "default_base_template")]
    base_template: PathBuf,
    #[serde(default = "default_pages_dir")]
    pages_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    static_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ServerSettings {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

#[derive(Debug, Deserialize)]
struct PageSettings {
    title: String,
    #[serde(default)]
    description: String,
    /// Defaults to the page identifier
    stylesheet: Option<String>,
    /// Defaults to the page identifier
    active_nav: Option<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            base_template: default_base_template(),
            pages_dir: default_pages_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_base_template() -> PathBuf {
    BuildConfig::default().base_template
}
fn default_pages_dir() -> PathBuf {
    BuildConfig::default().pages_dir
}
fn default_static_dir() -> PathBuf {
    BuildConfig::default().static_dir
}
fn default_output_dir() -> PathBuf {
    BuildConfig::default().output_dir
}
fn default_host() -> String {
    PreviewConfig::default().host
}
fn default_port() -> u16 {
    PreviewConfig::default().port
}

/// Resolved site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub build: BuildConfig,
    pub host: String,
    pub port: u16,
    pub registry: PageRegistry,
}

impl Default for SiteConfig {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl SiteConfig {
    /// Preview server settings, with an optional port override.
    pub fn preview(&self, port: Option<u16>) -> PreviewConfig {
        PreviewConfig {
            dir: self.build.output_dir.clone(),
            host: self.host.clone(),
            port: port.unwrap_or(self.port),
        }
    }
}

impl From<ConfigFile> for SiteConfig {
    fn from(file: ConfigFile) -> Self {
        let registry = if file.pages.is_empty() {
            PageRegistry::builtin()
        } else {
            file.pages
                .into_iter()
                .map(|(identifier, page)| {
                    let mut config = PageConfig::new(identifier, page.title, page.description);
                    if let Some(stylesheet) = page.stylesheet {
                        config = config.with_stylesheet(stylesheet);
                    }
                    if let Some(active_nav) = page.active_nav {
                        config = config.with_active_nav(active_nav);
                    }
                    config
                })
                .collect()
        };

        Self {
            build: BuildConfig {
                base_template: file.build.base_template,
                pages_dir: file.build.pages_dir,
                static_dir: file.build.static_dir,
                output_dir: file.build.output_dir,
            },
            host: file.server.host,
            port: file.server.port,
            registry,
        }
    }
}

/// Parse configuration from TOML source.
pub fn parse(source: &str) -> Result<SiteConfig> {
    let file: ConfigFile = toml::from_str(source)?;
    Ok(file.into())
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(SiteConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config =
        parse(&content).with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

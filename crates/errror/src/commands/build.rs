//! Static site build command.

use anyhow::Result;
use errror_static::{BuildResult, StaticBuilder};

use crate::config::SiteConfig;

/// Run the build command.
///
/// Pages that fail are logged and left out; only errors that stop the whole
/// build are returned.
pub fn run(config: &SiteConfig) -> Result<BuildResult> {
    tracing::info!("Building site...");
    tracing::debug!(
        "Registered pages: {}",
        config.registry.identifiers().collect::<Vec<_>>().join(", ")
    );

    let result = StaticBuilder::new(config.build.clone(), config.registry.clone()).build()?;

    tracing::info!(
        "Built {} pages ({} skipped, {} unregistered) in {}ms",
        result.built.len(),
        result.skipped.len(),
        result.unregistered.len(),
        result.duration_ms
    );

    if result.is_clean() {
        tracing::info!(
            "Build complete! Site is ready in {}",
            result.output_dir.display()
        );
    } else {
        for page in &result.skipped {
            tracing::warn!("Skipped {}: {}", page.identifier, page.error);
        }
        if let Err(e) = &result.assets {
            tracing::warn!("Static assets incomplete: {}", e);
        }
        tracing::warn!(
            "Build finished with problems; partial site in {}",
            result.output_dir.display()
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn site_config(root: &Path) -> SiteConfig {
        fs::create_dir_all(root.join("templates/pages")).unwrap();
        fs::write(
            root.join("templates/base.html"),
            "<title>{{ title }}</title>{% include \"page.html\" %}",
        )
        .unwrap();

        let mut config = SiteConfig::default();
        config.build.base_template = root.join("templates/base.html");
        config.build.pages_dir = root.join("templates/pages");
        config.build.static_dir = root.join("static");
        config.build.output_dir = root.join("dist");
        config
    }

    #[test]
    fn builds_builtin_pages() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let config = site_config(root);
        fs::write(root.join("templates/pages/wade.html"), "<h1>Wade</h1>").unwrap();

        let result = run(&config).unwrap();

        assert!(result.is_clean());
        assert_eq!(result.built, vec![root.join("dist/wade.html")]);
        assert_eq!(
            fs::read_to_string(root.join("dist/wade.html")).unwrap(),
            "<title>Trial and Errror - Meet Wade</title><h1>Wade</h1>"
        );
    }

    #[test]
    fn partial_build_still_succeeds() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let config = site_config(root);
        fs::write(root.join("templates/pages/wade.html"), "<h1>Wade</h1>").unwrap();
        fs::write(root.join("templates/pages/about.html"), "{% if %}").unwrap();
        fs::write(root.join("static"), "not a directory").unwrap();

        let result = run(&config).unwrap();

        assert!(!result.is_clean());
        assert_eq!(result.built, vec![root.join("dist/wade.html")]);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.assets.is_err());
    }
}

//! Static asset copying.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Errors that abort the asset copy step.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Static path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk static directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Mirror `static_dir` into `output_dir`, returning the number of files copied.
///
/// Relative paths are preserved: `static/css/site.css` lands at
/// `<output>/css/site.css`. The first failure stops the copy.
pub fn copy_assets(static_dir: &Path, output_dir: &Path) -> Result<usize, AssetError> {
    if static_dir.exists() && !static_dir.is_dir() {
        return Err(AssetError::NotADirectory(static_dir.to_path_buf()));
    }

    create_dir(output_dir)?;

    let mut copied = 0;

    for entry in WalkDir::new(static_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(static_dir)
            .unwrap_or(entry.path());
        let target = output_dir.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }

        fs::copy(entry.path(), &target).map_err(|source| AssetError::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        })?;

        tracing::debug!("Copied {}", relative.display());
        copied += 1;
    }

    Ok(copied)
}

fn create_dir(path: &Path) -> Result<(), AssetError> {
    fs::create_dir_all(path).map_err(|source| AssetError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn mirrors_nested_tree() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("static");
        let out = temp.path().join("dist");

        fs::create_dir_all(src.join("css")).unwrap();
        fs::create_dir_all(src.join("img/icons")).unwrap();
        fs::write(src.join("robots.txt"), "User-agent: *").unwrap();
        fs::write(src.join("css/index.css"), "body { margin: 0; }").unwrap();
        fs::write(src.join("img/icons/logo.png"), [0x89, b'P', b'N', b'G', 0, 255]).unwrap();

        let copied = copy_assets(&src, &out).unwrap();

        assert_eq!(copied, 3);
        for file in ["robots.txt", "css/index.css", "img/icons/logo.png"] {
            assert_eq!(
                fs::read(out.join(file)).unwrap(),
                fs::read(src.join(file)).unwrap(),
                "{file} differs"
            );
        }
    }

    #[test]
    fn copies_empty_directories() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("static");
        let out = temp.path().join("dist");
        fs::create_dir_all(src.join("fonts")).unwrap();

        let copied = copy_assets(&src, &out).unwrap();

        assert_eq!(copied, 0);
        assert!(out.join("fonts").is_dir());
    }

    #[test]
    fn keeps_existing_output() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("static");
        let out = temp.path().join("dist");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&out).unwrap();
        fs::write(src.join("site.js"), "new").unwrap();
        fs::write(out.join("index.html"), "page").unwrap();

        copy_assets(&src, &out).unwrap();

        assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), "page");
        assert_eq!(fs::read_to_string(out.join("site.js")).unwrap(), "new");
    }

    #[test]
    fn file_source_is_an_error() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("static");
        fs::write(&src, "not a directory").unwrap();

        let result = copy_assets(&src, &temp.path().join("dist"));

        assert!(matches!(result, Err(AssetError::NotADirectory(_))));
    }

    #[test]
    fn missing_source_is_an_error() {
        let temp = tempdir().unwrap();

        let result = copy_assets(&temp.path().join("static"), &temp.path().join("dist"));

        assert!(matches!(result, Err(AssetError::Walk(_))));
    }
}

//! Local project layout: `<app_dir>/src` and `<app_dir>/archive`.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved directories of one app project.
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub root: PathBuf,
    /// Extraction target; cleared before every new download.
    pub src_dir: PathBuf,
    /// Retains timestamped historical copies of downloaded archives.
    pub archive_dir: PathBuf,
}

impl AppLayout {
    /// Validate `app_dir` and create the `src`/`archive` subfolders if absent.
    pub fn prepare(app_dir: &Path) -> Result<Self> {
        validate_directory(app_dir)
            .with_context(|| format!("app directory '{}'", app_dir.display()))?;

        let src_dir = app_dir.join("src");
        let archive_dir = app_dir.join("archive");
        for dir in [&src_dir, &archive_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("create {}", dir.display()))?;
                tracing::info!("created {}", dir.display());
            }
        }

        Ok(Self {
            root: app_dir.to_path_buf(),
            src_dir,
            archive_dir,
        })
    }
}

/// Fails unless `dir` exists and is a directory.
pub fn validate_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        anyhow::bail!("'{}' not found", dir.display());
    }
    if !dir.is_dir() {
        anyhow::bail!("'{}' is not a directory", dir.display());
    }
    Ok(())
}

/// Delete every file, symlink, and subtree inside `dir`, keeping `dir`
/// itself. Per-entry failures are logged and skipped so one stubborn file
/// does not abort the run.
pub fn clear_dir_contents(dir: &Path) -> Result<()> {
    validate_directory(dir)?;
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let result = if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = result {
            tracing::error!("failed to delete {}: {e}", path.display());
        }
    }
    tracing::info!("cleared contents of {}", dir.display());
    Ok(())
}

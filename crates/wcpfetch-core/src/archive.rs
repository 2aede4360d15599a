//! Archive handling: move into the archive folder, timestamp-rename, extract.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Move `file` into `dir`, keeping its file name.
///
/// The downloads folder is commonly on a different mount than the project,
/// so a failed rename falls back to copy-then-remove.
pub fn move_into(file: &Path, dir: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .with_context(|| format!("'{}' has no file name", file.display()))?;
    let dest = dir.join(name);
    if fs::rename(file, &dest).is_err() {
        fs::copy(file, &dest)
            .with_context(|| format!("copy {} to {}", file.display(), dest.display()))?;
        fs::remove_file(file)
            .with_context(|| format!("remove {}", file.display()))?;
    }
    tracing::info!("moved {} to {}", file.display(), dest.display());
    Ok(dest)
}

/// Rename `file` in place to `<stem>_<YYYYMMDD_HHMMSS>[.ext]`.
///
/// If that name is somehow taken already, a numeric counter is appended so
/// archive names never collide within the same run.
pub fn timestamp_rename(file: &Path) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    timestamp_rename_with(file, &stamp)
}

fn timestamp_rename_with(file: &Path, stamp: &str) -> Result<PathBuf> {
    let parent = file.parent().unwrap_or_else(|| Path::new("."));
    let stem = file
        .file_stem()
        .with_context(|| format!("'{}' has no file name", file.display()))?
        .to_string_lossy();
    let ext = file
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut target = parent.join(format!("{stem}_{stamp}{ext}"));
    let mut counter = 1u32;
    while target.exists() {
        target = parent.join(format!("{stem}_{stamp}_{counter}{ext}"));
        counter += 1;
    }

    fs::rename(file, &target)
        .with_context(|| format!("rename {} to {}", file.display(), target.display()))?;
    tracing::info!("renamed {} to {}", file.display(), target.display());
    Ok(target)
}

/// Extract the whole zip into `dest_dir`. The destination must already exist.
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<()> {
    crate::layout::validate_directory(dest_dir)
        .with_context(|| format!("extraction directory '{}'", dest_dir.display()))?;
    let file = fs::File::open(zip_path)
        .with_context(|| format!("open {}", zip_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("'{}' is not a valid zip file", zip_path.display()))?;
    archive
        .extract(dest_dir)
        .with_context(|| format!("extract {} to {}", zip_path.display(), dest_dir.display()))?;
    tracing::info!(
        "extracted {} to {}",
        zip_path.display(),
        dest_dir.display()
    );
    Ok(())
}

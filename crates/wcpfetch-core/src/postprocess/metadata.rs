//! Metadata-file renaming (`*.amd` / `*.smd`).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rename exported metadata files under `<src>/presentation` to stable names:
/// `*.amd` → `application_metadata_<company_code>.amd` and `*.smd` →
/// `site_metadata_<company_code>.smd`.
///
/// Exported names follow a `<name>_<suffix>` convention; files without an
/// underscore in the stem are logged and left alone. Per-file failures never
/// abort the batch. Missing `presentation/` is fine (nothing to do).
pub fn rename_metadata_files(src_dir: &Path, company_code: &str) -> Result<()> {
    let presentation = src_dir.join("presentation");
    if !presentation.is_dir() {
        tracing::debug!("no presentation directory under {}", src_dir.display());
        return Ok(());
    }

    for entry in fs::read_dir(&presentation)
        .with_context(|| format!("read dir {}", presentation.display()))?
    {
        let path = entry?.path();
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext @ ("amd" | "smd")) if path.is_file() => ext,
            _ => continue,
        };
        match normalized_name(&path, ext, company_code) {
            Ok(new_name) => {
                let target = presentation.join(&new_name);
                match fs::rename(&path, &target) {
                    Ok(()) => tracing::info!(
                        "renamed {} to {}",
                        path.display(),
                        target.display()
                    ),
                    Err(e) => tracing::error!("failed to rename {}: {e}", path.display()),
                }
            }
            Err(e) => tracing::error!("skipping {}: {e}", path.display()),
        }
    }
    Ok(())
}

fn normalized_name(path: &Path, ext: &str, company_code: &str) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("'{}' has no usable file stem", path.display()))?;
    if !stem.contains('_') {
        anyhow::bail!("file stem '{stem}' does not follow the <name>_<suffix> convention");
    }
    let kind = match ext {
        "amd" => "application_metadata",
        "smd" => "site_metadata",
        _ => "metadata",
    };
    Ok(format!("{kind}_{company_code}.{ext}"))
}

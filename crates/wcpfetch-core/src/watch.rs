//! Downloads-directory watching.
//!
//! The portal download is browser-mediated: we open a URL and the browser
//! drops a `.zip` into the operator's downloads folder. There is no protocol
//! to speak, so this is a deliberate fixed-interval poll against an mtime
//! snapshot, with one overall timeout.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// Newest `.zip` in `dir` by modification time, if any.
pub fn newest_zip(dir: &Path) -> Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    let entries = fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension() != Some(OsStr::new("zip")) {
            continue;
        }
        let mtime = entry.metadata()?.modified()?;
        if newest.as_ref().map_or(true, |(best, _)| mtime > *best) {
            newest = Some((mtime, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

/// File name of the newest zip before the download is triggered. Used to tell
/// a freshly landed archive apart from whatever was already there.
pub fn snapshot(dir: &Path) -> Result<Option<String>> {
    Ok(newest_zip(dir)?
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned())))
}

/// Poll `dir` until a zip whose name differs from `before` shows up.
///
/// Returns the path of the new archive, or an error once `timeout` elapses.
/// Note the browser may still be writing when the file first appears; the
/// portal serves small source archives, so the original tool accepted this
/// and so do we.
pub fn wait_for_download(
    dir: &Path,
    before: Option<&str>,
    timeout: Duration,
    interval: Duration,
) -> Result<PathBuf> {
    let start = Instant::now();
    loop {
        if let Some(candidate) = newest_zip(dir)? {
            let name = candidate
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if before != Some(name.as_str()) {
                tracing::info!("download complete: {}", candidate.display());
                return Ok(candidate);
            }
        }
        if start.elapsed() >= timeout {
            anyhow::bail!(
                "download timed out after {} seconds",
                timeout.as_secs()
            );
        }
        std::thread::sleep(interval);
    }
}

//! The fetch pipeline: one linear pass from reference id to normalized sources.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::archive;
use crate::config::FetchConfig;
use crate::layout::{self, AppLayout};
use crate::portal::PortalClient;
use crate::postprocess;
use crate::watch;

/// Source-archive endpoint for one application.
pub fn source_archive_url(portal_base_url: &str, app_id: &str) -> String {
    format!(
        "{}/devtools/v1/appbuilder/{}/source/archive",
        portal_base_url.trim_end_matches('/'),
        app_id
    )
}

/// Full workflow: authenticate, resolve the reference id, trigger the
/// browser-mediated download, wait for the archive to land, then post-process
/// it into the app layout.
pub fn run_fetch(
    cfg: &FetchConfig,
    reference_id: &str,
    app_dir: &Path,
    download_dir_override: Option<&Path>,
) -> Result<()> {
    let download_dir = match download_dir_override {
        Some(dir) => dir.to_path_buf(),
        None => cfg.download_dir()?,
    };
    layout::validate_directory(&download_dir)
        .with_context(|| format!("download directory '{}'", download_dir.display()))?;
    let app_layout = AppLayout::prepare(app_dir)?;

    let portal = PortalClient::new(&cfg.cli_bin);
    portal.login()?;
    let app_id = portal.resolve_app_id(reference_id)?;

    let downloaded = trigger_and_wait(cfg, &app_id, &download_dir)?;
    process_download(&downloaded, &app_layout, &cfg.company_code)?;

    tracing::info!("app download complete");
    Ok(())
}

/// Open the source-archive URL in the default browser and poll the downloads
/// directory until a new zip shows up.
fn trigger_and_wait(cfg: &FetchConfig, app_id: &str, download_dir: &Path) -> Result<PathBuf> {
    let url = source_archive_url(&cfg.portal_base_url, app_id);
    tracing::info!("downloading source archive from {url}");

    let before = watch::snapshot(download_dir)?;
    open::that(&url).with_context(|| format!("open {url} in browser"))?;
    watch::wait_for_download(
        download_dir,
        before.as_deref(),
        Duration::from_secs(cfg.download_timeout_secs),
        Duration::from_millis(cfg.poll_interval_ms),
    )
}

/// Post-process a downloaded archive that is already on disk: clear `src/`,
/// move the zip into `archive/` under a timestamped name, extract it, then
/// normalize file names and embedded JSON.
pub fn process_download(
    downloaded: &Path,
    app_layout: &AppLayout,
    company_code: &str,
) -> Result<()> {
    tracing::info!("clearing {}", app_layout.src_dir.display());
    layout::clear_dir_contents(&app_layout.src_dir)?;

    let in_archive = archive::move_into(downloaded, &app_layout.archive_dir)?;
    let stamped = archive::timestamp_rename(&in_archive)?;
    archive::extract_zip(&stamped, &app_layout.src_dir)?;

    postprocess::rename_metadata_files(&app_layout.src_dir, company_code)?;
    postprocess::pretty_print_orchestrations(&app_layout.src_dir)?;
    Ok(())
}

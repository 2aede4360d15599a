//! `wcpfetch process <archive> <app_dir>` – post-process an existing archive.

use anyhow::{Context, Result};
use std::path::Path;
use wcpfetch_core::config::FetchConfig;
use wcpfetch_core::layout::AppLayout;
use wcpfetch_core::pipeline;

pub fn run_process(cfg: &FetchConfig, archive: &Path, app_dir: &Path) -> Result<()> {
    anyhow::ensure!(
        archive.is_file(),
        "archive '{}' not found",
        archive.display()
    );
    let layout = AppLayout::prepare(app_dir)
        .with_context(|| format!("prepare app directory '{}'", app_dir.display()))?;
    pipeline::process_download(archive, &layout, &cfg.company_code)?;
    println!("Processed {} into {}", archive.display(), app_dir.display());
    Ok(())
}

//! `wcpfetch fetch <reference_id> <app_dir> [download_dir]` – full workflow.

use anyhow::Result;
use std::path::Path;
use wcpfetch_core::config::FetchConfig;
use wcpfetch_core::pipeline;

pub fn run_fetch(
    cfg: &FetchConfig,
    reference_id: &str,
    app_dir: &Path,
    download_dir: Option<&Path>,
) -> Result<()> {
    pipeline::run_fetch(cfg, reference_id, app_dir, download_dir)?;
    println!("App source fetched into {}", app_dir.display());
    Ok(())
}

//! `wcpfetch resolve <reference_id>` – print the portal application id.

use anyhow::Result;
use wcpfetch_core::config::FetchConfig;
use wcpfetch_core::portal::PortalClient;

pub fn run_resolve(cfg: &FetchConfig, reference_id: &str) -> Result<()> {
    let app_id = PortalClient::new(&cfg.cli_bin).resolve_app_id(reference_id)?;
    println!("{app_id}");
    Ok(())
}

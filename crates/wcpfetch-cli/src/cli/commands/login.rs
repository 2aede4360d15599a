//! `wcpfetch login` – authenticate against the portal CLI.

use anyhow::Result;
use wcpfetch_core::config::FetchConfig;
use wcpfetch_core::portal::PortalClient;

pub fn run_login(cfg: &FetchConfig) -> Result<()> {
    PortalClient::new(&cfg.cli_bin).login()?;
    println!("Portal login successful.");
    Ok(())
}

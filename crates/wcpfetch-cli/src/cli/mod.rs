//! CLI for the wcpfetch app-source fetcher.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use wcpfetch_core::config;

use commands::{run_completions, run_fetch, run_login, run_process, run_resolve};

/// Top-level CLI for the wcpfetch app-source fetcher.
#[derive(Debug, Parser)]
#[command(name = "wcpfetch")]
#[command(about = "Fetch and normalize app source archives from the developer portal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the full workflow: login, resolve, download, archive, extract, normalize.
    Fetch {
        /// Human reference identifier of the application (a `wcp_` prefix is stripped).
        reference_id: String,
        /// App project directory; `src/` and `archive/` are created inside it.
        app_dir: PathBuf,
        /// Browser downloads directory (defaults to config, then the platform default).
        download_dir: Option<PathBuf>,
    },

    /// Authenticate against the portal CLI only.
    Login,

    /// Resolve a reference identifier and print the application id.
    Resolve {
        /// Human reference identifier of the application.
        reference_id: String,
    },

    /// Post-process an archive that is already on disk (no portal contact).
    Process {
        /// Path to the downloaded source zip.
        archive: PathBuf,
        /// App project directory; `src/` and `archive/` are created inside it.
        app_dir: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                reference_id,
                app_dir,
                download_dir,
            } => run_fetch(&cfg, &reference_id, &app_dir, download_dir.as_deref())?,
            CliCommand::Login => run_login(&cfg)?,
            CliCommand::Resolve { reference_id } => run_resolve(&cfg, &reference_id)?,
            CliCommand::Process { archive, app_dir } => run_process(&cfg, &archive, &app_dir)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

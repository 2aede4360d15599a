//! `wcpfetch completions <shell>` – emit shell completions on stdout.

use anyhow::Result;
use clap_complete::Shell;

pub fn run_completions(shell: Shell, cmd: &mut clap::Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}

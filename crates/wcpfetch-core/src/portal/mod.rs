//! Wrapper around the portal's companion CLI (`wcpcli`).
//!
//! Everything the developer portal is asked for goes through one external
//! executable: `auth:login` for the interactive login and `apps:list` for the
//! tenant's application listing. The listing is one human header line
//! followed by a JSON array carrying `referenceId`/`id` pairs.

mod error;
mod parse;

pub use error::PortalError;
pub use parse::{find_app_id, normalize_reference_id, parse_app_listing, AppEntry};

use std::process::Command;

/// Handle on the portal CLI. Cheap to construct; each call spawns one
/// short-lived child process and blocks on it.
#[derive(Debug, Clone)]
pub struct PortalClient {
    bin: String,
}

impl PortalClient {
    /// `cli_bin` is the executable name from config; on Windows the portal
    /// ships it as a `.cmd` shim.
    pub fn new(cli_bin: &str) -> Self {
        #[cfg(windows)]
        let bin = format!("{cli_bin}.cmd");
        #[cfg(not(windows))]
        let bin = cli_bin.to_string();
        Self { bin }
    }

    /// Run the CLI with `args`, returning captured stdout on a zero exit.
    fn run(&self, args: &[&str]) -> Result<String, PortalError> {
        tracing::debug!("running `{} {}`", self.bin, args.join(" "));
        let output = Command::new(&self.bin)
            .args(args)
            .output()
            .map_err(|source| PortalError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(PortalError::Failed {
                command: format!("{} {}", self.bin, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Interactive portal login. The CLI drives the flow itself; a zero exit
    /// means the session is established.
    pub fn login(&self) -> Result<(), PortalError> {
        self.run(&["auth:login"])?;
        tracing::info!("portal login successful");
        Ok(())
    }

    /// Fetch and parse the tenant's application listing.
    pub fn list_apps(&self) -> Result<Vec<AppEntry>, PortalError> {
        let stdout = self.run(&["apps:list"])?;
        parse_app_listing(&stdout)
    }

    /// Resolve a human reference identifier to the portal's application id.
    /// A reference id maps to at most one application.
    pub fn resolve_app_id(&self, reference_id: &str) -> Result<String, PortalError> {
        let apps = self.list_apps()?;
        let app_id = find_app_id(&apps, reference_id)?;
        tracing::info!("resolved reference id '{reference_id}' to application {app_id}");
        Ok(app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn fake_cli(dir: &std::path::Path, stdout: &str, exit_code: i32) -> String {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-wcpcli");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "#!/bin/sh\ncat <<'EOF'\n{stdout}\nEOF\nexit {exit_code}\n").unwrap();
        let mut perms = f.metadata().unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[cfg(unix)]
    #[test]
    fn resolve_via_fake_cli() {
        let dir = tempfile::tempdir().unwrap();
        let listing = concat!(
            "Applications for tenant acme:\n",
            r#"[{ "referenceId": "expenses", "id": "c9a1f0" }]"#
        );
        let bin = fake_cli(dir.path(), listing, 0);
        let client = PortalClient::new(&bin);
        assert_eq!(client.resolve_app_id("expenses").unwrap(), "c9a1f0");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_cli(dir.path(), "boom", 3);
        let client = PortalClient::new(&bin);
        assert!(matches!(
            client.login(),
            Err(PortalError::Failed { .. })
        ));
    }

    #[test]
    fn missing_executable_is_spawn_error() {
        let client = PortalClient::new("/nonexistent/wcpcli-definitely-absent");
        assert!(matches!(
            client.login(),
            Err(PortalError::Spawn { .. })
        ));
    }
}

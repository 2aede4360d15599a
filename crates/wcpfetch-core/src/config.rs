use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/wcpfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory the browser downloads into. If missing, the platform
    /// downloads directory is used.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Base URL of the developer portal. Non-US tenants use a different host.
    pub portal_base_url: String,
    /// Name of the companion portal CLI executable on PATH.
    pub cli_bin: String,
    /// Company code substituted into normalized metadata filenames.
    pub company_code: String,
    /// Overall wait for the browser download to land, in seconds.
    pub download_timeout_secs: u64,
    /// Fixed interval between downloads-directory polls, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            portal_base_url: "https://api.us.developer.workday.com".to_string(),
            cli_bin: "wcpcli".to_string(),
            company_code: "xxxxxx".to_string(),
            download_timeout_secs: 60,
            poll_interval_ms: 1000,
        }
    }
}

impl FetchConfig {
    /// Effective downloads directory: explicit config value, else the
    /// platform default.
    pub fn download_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.download_dir {
            return Ok(dir.clone());
        }
        dirs::download_dir().context("no download_dir configured and no platform downloads directory found")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wcpfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FetchConfig::default();
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.portal_base_url, "https://api.us.developer.workday.com");
        assert_eq!(cfg.cli_bin, "wcpcli");
        assert_eq!(cfg.company_code, "xxxxxx");
        assert_eq!(cfg.download_timeout_secs, 60);
        assert_eq!(cfg.poll_interval_ms, 1000);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.portal_base_url, cfg.portal_base_url);
        assert_eq!(parsed.cli_bin, cfg.cli_bin);
        assert_eq!(parsed.company_code, cfg.company_code);
        assert_eq!(parsed.download_timeout_secs, cfg.download_timeout_secs);
        assert_eq!(parsed.poll_interval_ms, cfg.poll_interval_ms);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            download_dir = "/home/op/Downloads"
            portal_base_url = "https://api.eu.developer.workday.com"
            cli_bin = "wcpcli-beta"
            company_code = "acme01"
            download_timeout_secs = 120
            poll_interval_ms = 500
        "#;
        let cfg: FetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.download_dir.as_deref(),
            Some(std::path::Path::new("/home/op/Downloads"))
        );
        assert_eq!(cfg.portal_base_url, "https://api.eu.developer.workday.com");
        assert_eq!(cfg.cli_bin, "wcpcli-beta");
        assert_eq!(cfg.company_code, "acme01");
        assert_eq!(cfg.download_timeout_secs, 120);
        assert_eq!(cfg.poll_interval_ms, 500);
    }

    #[test]
    fn explicit_download_dir_wins() {
        let cfg = FetchConfig {
            download_dir: Some(PathBuf::from("/tmp/dl")),
            ..FetchConfig::default()
        };
        assert_eq!(cfg.download_dir().unwrap(), PathBuf::from("/tmp/dl"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CONFIG_FILE: &str = "isg.ron";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Settings for one monitored console, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AppConfig {
    pub host: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// First CLI argument, or [`DEFAULT_CONFIG_FILE`] in the working directory.
pub(crate) fn config_path(mut args: impl Iterator<Item = String>) -> PathBuf {
    args.nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub(crate) fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    ensure!(!config.host.trim().is_empty(), "config host must not be empty");
    ensure!(
        config.poll_interval_secs > 0,
        "poll_interval_secs must be at least 1"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn full_config_is_loaded() {
        let (_dir, path) =
            write_config(r#"(host: "192.168.1.20", poll_interval_secs: 30, log_to_file: true)"#);
        let config = load_config(&path).unwrap();
        assert_eq!(
            config,
            AppConfig {
                host: "192.168.1.20".to_string(),
                poll_interval_secs: 30,
                log_to_file: true,
            }
        );
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
    }

    #[test]
    fn optional_fields_take_defaults() {
        let (_dir, path) = write_config(r#"(host: "isg.local")"#);
        let config = load_config(&path).unwrap();
        assert_eq!(config.poll_interval_secs, 60);
        assert!(!config.log_to_file);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.ron")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn malformed_or_invalid_config_is_rejected() {
        let (_dir, path) = write_config("(host: 42)");
        assert!(load_config(&path).is_err());

        let (_dir, path) = write_config(r#"(host: "  ")"#);
        assert!(load_config(&path).is_err());

        let (_dir, path) = write_config(r#"(host: "isg.local", poll_interval_secs: 0)"#);
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn config_path_prefers_first_argument() {
        let args = ["isg_app", "/etc/isg.ron"].map(str::to_string);
        assert_eq!(config_path(args.into_iter()), PathBuf::from("/etc/isg.ron"));
        let args = ["isg_app"].map(str::to_string);
        assert_eq!(config_path(args.into_iter()), PathBuf::from(DEFAULT_CONFIG_FILE));
    }
}

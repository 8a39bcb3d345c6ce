// ABOUTME: JSON configuration file holding the default and per-directory workspaces
// ABOUTME: Unreadable files load as defaults; write failures propagate as io::Error

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::files;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub default_workspace: Option<String>,

    /// Absolute directory path to workspace name
    #[serde(default)]
    pub directory_workspaces: BTreeMap<String, String>,
}

impl Config {
    /// Load from `path`, falling back to an empty configuration
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log::debug!("Ignoring config at {}: {}", path.display(), e);
                }
                Config::default()
            }
        }
    }

    fn try_load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write as 2-space indented JSON, creating the parent directory
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// `~/.linear-cli/config.json`
    pub fn default_path() -> io::Result<PathBuf> {
        Self::path_under(dirs::home_dir())
    }

    /// Config location under `home`; no home directory is an error
    pub fn path_under(home: Option<PathBuf>) -> io::Result<PathBuf> {
        let home = home.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the home directory for the config file",
            )
        })?;
        Ok(home.join(files::CONFIG_DIR).join(files::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_workspace.is_none());
        assert!(config.directory_workspaces.is_empty());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unparsable_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_camel_case_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config {
            default_workspace: Some("acme".to_string()),
            ..Default::default()
        };
        config
            .directory_workspaces
            .insert("/work/client".to_string(), "client".to_string());
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"defaultWorkspace\": \"acme\""));
        assert!(raw.contains("\"directoryWorkspaces\""));
        assert!(raw.contains("\n  \""));

        assert_eq!(Config::load(&path), config);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"defaultWorkspace": null}"#).unwrap();

        let config = Config::load(&path);
        assert!(config.default_workspace.is_none());
        assert!(config.directory_workspaces.is_empty());
    }

    #[test]
    fn test_path_under_home() {
        let path = Config::path_under(Some(PathBuf::from("/home/ada"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/ada/.linear-cli/config.json"));
    }

    #[test]
    fn test_path_without_home_is_an_error() {
        let err = Config::path_under(None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_save_failure_propagates() {
        let dir = TempDir::new().unwrap();
        // A file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = Config::default().save(&blocker.join("config.json"));
        assert!(result.is_err());
    }
}

// ABOUTME: Resolves which named workspace applies to an invocation
// ABOUTME: Precedence is flag, marker file, directory config entry, then the default

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::{DEFAULT_WORKSPACE, MAX_MARKER_DEPTH, files};

/// Which precedence step produced the workspace name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSource {
    Flag,
    Marker,
    DirectoryConfig,
    DefaultWorkspace,
    Fallback,
}

impl fmt::Display for WorkspaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WorkspaceSource::Flag => "--workspace flag",
            WorkspaceSource::Marker => "marker file",
            WorkspaceSource::DirectoryConfig => "directory config",
            WorkspaceSource::DefaultWorkspace => "default workspace",
            WorkspaceSource::Fallback => "built-in default",
        };
        write!(f, "{}", text)
    }
}

/// Owns the loaded configuration for one invocation
#[derive(Debug)]
pub struct WorkspaceManager {
    config_path: PathBuf,
    cwd: PathBuf,
    config: Config,
}

impl WorkspaceManager {
    /// Load the config at `config_path`; `cwd` anchors marker and directory lookups
    pub fn new(config_path: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();
        let config = Config::load(&config_path);
        Self {
            config_path,
            cwd: cwd.into(),
            config,
        }
    }

    /// Manager for the user's config file and the process working directory
    pub fn from_environment() -> io::Result<Self> {
        Ok(Self::new(Config::default_path()?, std::env::current_dir()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn resolve(&self, flag: Option<&str>) -> String {
        self.resolve_with_source(flag).0
    }

    pub fn resolve_with_source(&self, flag: Option<&str>) -> (String, WorkspaceSource) {
        let (name, source) = if let Some(name) = flag.filter(|f| !f.is_empty()) {
            (name.to_string(), WorkspaceSource::Flag)
        } else if let Some(name) = self.find_marker() {
            (name, WorkspaceSource::Marker)
        } else if let Some(name) = self.config.directory_workspaces.get(&self.cwd_key()) {
            (name.clone(), WorkspaceSource::DirectoryConfig)
        } else if let Some(name) = &self.config.default_workspace {
            (name.clone(), WorkspaceSource::DefaultWorkspace)
        } else {
            (DEFAULT_WORKSPACE.to_string(), WorkspaceSource::Fallback)
        };

        log::debug!("Resolved workspace '{}' from {}", name, source);
        (name, source)
    }

    /// Trimmed content of the nearest marker at or above the working directory.
    /// The first marker found ends the search, and an empty one names nothing.
    pub fn find_marker(&self) -> Option<String> {
        for dir in self.cwd.ancestors().take(MAX_MARKER_DEPTH) {
            let path = dir.join(files::MARKER_FILE);
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    let name = content.trim();
                    log::debug!("Found marker at {}", path.display());
                    return (!name.is_empty()).then(|| name.to_string());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => log::debug!("Skipping unreadable marker {}: {}", path.display(), e),
            }
        }
        None
    }

    pub fn set_default_workspace(&mut self, name: &str) -> io::Result<()> {
        self.config.default_workspace = Some(name.to_string());
        self.config.save(&self.config_path)
    }

    /// Write the marker file into the working directory
    pub fn set_directory_workspace(&self, name: &str) -> io::Result<PathBuf> {
        let path = self.cwd.join(files::MARKER_FILE);
        std::fs::write(&path, name)?;
        Ok(path)
    }

    pub fn set_directory_config(&mut self, name: &str) -> io::Result<()> {
        self.config
            .directory_workspaces
            .insert(self.cwd_key(), name.to_string());
        self.config.save(&self.config_path)
    }

    /// Returns the removed workspace name, if the directory had one
    pub fn remove_directory_config(&mut self) -> io::Result<Option<String>> {
        let removed = self.config.directory_workspaces.remove(&self.cwd_key());
        self.config.save(&self.config_path)?;
        Ok(removed)
    }

    /// Sorted, de-duplicated workspace names known from config and markers
    pub fn list_workspaces(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        if let Some(default) = &self.config.default_workspace {
            names.insert(default.clone());
        }
        names.extend(self.config.directory_workspaces.values().cloned());
        if let Some(marker) = self.find_marker() {
            names.insert(marker);
        }
        names.into_iter().collect()
    }

    fn cwd_key(&self) -> String {
        self.cwd.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(home: &TempDir, cwd: &Path) -> WorkspaceManager {
        WorkspaceManager::new(home.path().join("config.json"), cwd)
    }

    #[test]
    fn test_fallback_is_default() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let manager = manager_in(&home, work.path());

        assert_eq!(
            manager.resolve_with_source(None),
            ("default".to_string(), WorkspaceSource::Fallback)
        );
    }

    #[test]
    fn test_empty_flag_is_ignored() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let mut manager = manager_in(&home, work.path());
        manager.set_default_workspace("acme").unwrap();

        assert_eq!(manager.resolve(Some("")), "acme");
    }

    #[test]
    fn test_marker_content_is_trimmed() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        std::fs::write(work.path().join(".linear-workspace"), "  client\n").unwrap();

        let manager = manager_in(&home, work.path());
        assert_eq!(
            manager.resolve_with_source(None),
            ("client".to_string(), WorkspaceSource::Marker)
        );
    }

    #[test]
    fn test_empty_marker_falls_through() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        std::fs::write(work.path().join(".linear-workspace"), "\n").unwrap();

        let mut manager = manager_in(&home, work.path());
        manager.set_default_workspace("acme").unwrap();
        assert_eq!(manager.resolve(None), "acme");
    }

    #[test]
    fn test_nearest_marker_wins() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let child = work.path().join("child");
        std::fs::create_dir(&child).unwrap();
        std::fs::write(work.path().join(".linear-workspace"), "outer").unwrap();
        std::fs::write(child.join(".linear-workspace"), "inner").unwrap();

        assert_eq!(manager_in(&home, &child).resolve(None), "inner");
    }

    #[test]
    fn test_remove_directory_config() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let mut manager = manager_in(&home, work.path());

        manager.set_directory_config("teamA").unwrap();
        assert_eq!(
            manager.remove_directory_config().unwrap(),
            Some("teamA".to_string())
        );
        assert_eq!(manager.remove_directory_config().unwrap(), None);
        assert_eq!(manager.resolve(None), "default");

        let reloaded = manager_in(&home, work.path());
        assert!(reloaded.config().directory_workspaces.is_empty());
    }

    #[test]
    fn test_stale_directory_entries_are_kept() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        std::fs::write(
            home.path().join("config.json"),
            r#"{"defaultWorkspace":null,"directoryWorkspaces":{"/gone/away":"old"}}"#,
        )
        .unwrap();

        let mut manager = manager_in(&home, work.path());
        manager.set_directory_config("new").unwrap();

        let reloaded = manager_in(&home, work.path());
        assert_eq!(
            reloaded.config().directory_workspaces.get("/gone/away"),
            Some(&"old".to_string())
        );
        assert_eq!(reloaded.list_workspaces(), vec!["new", "old"]);
    }
}

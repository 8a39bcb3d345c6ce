// ABOUTME: Per-invocation application context handed to every command handler
// ABOUTME: Bundles the workspace manager, credential store, API override and output settings

use linear_sdk::constants::urls;
use linear_sdk::{CredentialStore, KeyringStore, WorkspaceAuth};

use crate::cli_output::CliOutput;
use crate::workspace::WorkspaceManager;

pub struct AppContext {
    pub workspaces: WorkspaceManager,
    pub store: Box<dyn CredentialStore>,
    /// Overrides the Linear API base URL when set
    pub api_url: Option<String>,
    /// Value of the global `--workspace` flag
    pub workspace_flag: Option<String>,
    pub output: CliOutput,
}

impl AppContext {
    pub fn new(
        workspaces: WorkspaceManager,
        store: Box<dyn CredentialStore>,
        output: CliOutput,
    ) -> Self {
        Self {
            workspaces,
            store,
            api_url: None,
            workspace_flag: None,
            output,
        }
    }

    /// User config, process cwd, system keychain and `LINEAR_API_URL`
    pub fn from_environment(
        workspace_flag: Option<String>,
        output: CliOutput,
    ) -> std::io::Result<Self> {
        let api_url = std::env::var(urls::API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty());
        if let Some(url) = &api_url {
            log::debug!("Using API base URL from {}: {}", urls::API_URL_ENV, url);
        }

        Ok(Self::new(
            WorkspaceManager::from_environment()?,
            Box::new(KeyringStore::new()),
            output,
        )
        .with_workspace_flag(workspace_flag)
        .with_api_url(api_url))
    }

    pub fn with_workspace_flag(mut self, flag: Option<String>) -> Self {
        self.workspace_flag = flag;
        self
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        self.api_url = api_url;
        self
    }

    pub fn resolve_workspace(&self) -> String {
        self.workspaces.resolve(self.workspace_flag.as_deref())
    }

    /// Token lifecycle for `workspace`, talking to the configured API
    pub fn auth(&self, workspace: &str) -> WorkspaceAuth<'_> {
        WorkspaceAuth::new(workspace, self.store.as_ref()).with_base_url(self.api_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linear_sdk::InMemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_flag_drives_resolution() {
        let home = TempDir::new().unwrap();
        let ctx = AppContext::new(
            WorkspaceManager::new(home.path().join("config.json"), home.path()),
            Box::new(InMemoryStore::new()),
            CliOutput::with_color(false),
        )
        .with_workspace_flag(Some("acme".to_string()));

        assert_eq!(ctx.resolve_workspace(), "acme");
        assert_eq!(ctx.auth("acme").account_name(), "workspace-acme");
    }
}

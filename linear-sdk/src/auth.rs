// ABOUTME: Per-workspace token lifecycle: login, lookup, logout and remote validation
// ABOUTME: Tokens live in a CredentialStore under the workspace's account name

use secrecy::{ExposeSecret, SecretString};

use crate::error::LinearError;
use crate::storage::{CredentialStore, account_name};
use crate::{LinearClient, Result};

/// Binds a workspace name to its stored API token
pub struct WorkspaceAuth<'a> {
    workspace: String,
    store: &'a dyn CredentialStore,
    base_url: Option<String>,
    token: Option<SecretString>,
}

impl<'a> WorkspaceAuth<'a> {
    pub fn new(workspace: impl Into<String>, store: &'a dyn CredentialStore) -> Self {
        Self {
            workspace: workspace.into(),
            store,
            base_url: None,
            token: None,
        }
    }

    /// Point validation requests at a different API base URL
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn account_name(&self) -> String {
        account_name(&self.workspace)
    }

    /// Validate the token remotely, then persist it. Nothing is stored on rejection.
    pub async fn login(&mut self, token: &str) -> Result<()> {
        let token = SecretString::new(token.to_string().into_boxed_str());
        if !self.validate_token(&token).await {
            return Err(LinearError::TokenRejected);
        }

        self.store.set(&self.account_name(), token.expose_secret())?;
        log::debug!("Stored token for workspace {}", self.workspace);
        self.token = Some(token);
        Ok(())
    }

    /// Cached token, else the stored one. Store failures read as "no token".
    pub fn get_token(&mut self) -> Option<SecretString> {
        if let Some(token) = &self.token {
            return Some(token.clone());
        }

        let stored = match self.store.get(&self.account_name()) {
            Ok(stored) => stored,
            Err(e) => {
                log::debug!("Credential lookup failed for {}: {}", self.workspace, e);
                None
            }
        };

        self.token = stored.map(|s| SecretString::new(s.into_boxed_str()));
        self.token.clone()
    }

    pub fn logout(&mut self) -> bool {
        match self.store.delete(&self.account_name()) {
            Ok(()) => {
                self.token = None;
                true
            }
            Err(e) => {
                log::debug!("Logout failed for {}: {}", self.workspace, e);
                false
            }
        }
    }

    /// True only for a successful `viewer` query returning an identity
    pub async fn validate_token(&self, token: &SecretString) -> bool {
        let client = match self.client_for(token.clone()) {
            Ok(client) => client,
            Err(e) => {
                log::debug!("Could not build client for validation: {}", e);
                return false;
            }
        };

        match client.viewer().await {
            Ok(data) => data.viewer.is_some(),
            Err(e) => {
                log::debug!("Token validation failed: {}", e);
                false
            }
        }
    }

    pub async fn is_authenticated(&mut self) -> bool {
        match self.get_token() {
            Some(token) => self.validate_token(&token).await,
            None => false,
        }
    }

    /// Client for a present and remotely-accepted token
    pub async fn authenticated_client(&mut self) -> Result<LinearClient> {
        let token = self
            .get_token()
            .ok_or_else(|| LinearError::NotAuthenticated(self.workspace.clone()))?;

        if !self.validate_token(&token).await {
            return Err(LinearError::InvalidToken(self.workspace.clone()));
        }

        self.client_for(token)
    }

    fn client_for(&self, token: SecretString) -> Result<LinearClient> {
        LinearClient::builder()
            .auth_token(token)
            .base_url(self.base_url.clone())
            .build()
    }
}

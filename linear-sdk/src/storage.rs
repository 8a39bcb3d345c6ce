// ABOUTME: Secure per-workspace token storage using the system keychain
// ABOUTME: Exposes a small get/set/delete trait with keyring and in-memory backends

use std::collections::HashMap;
use std::sync::Mutex;

use crate::constants::credentials;
use crate::error::LinearError;

/// Account name a workspace token is stored under, e.g. `workspace-acme`
pub fn account_name(workspace: &str) -> String {
    format!("{}{}", credentials::ACCOUNT_PREFIX, workspace)
}

/// Secret storage keyed by account name within a fixed service
pub trait CredentialStore: Send + Sync {
    /// `Ok(None)` when no secret exists for the account
    fn get(&self, account: &str) -> Result<Option<String>, LinearError>;

    /// Overwrites any existing secret; last write wins
    fn set(&self, account: &str, secret: &str) -> Result<(), LinearError>;

    fn delete(&self, account: &str) -> Result<(), LinearError>;
}

/// OS keychain backend (Keychain, Credential Manager, kernel keyutils)
pub struct KeyringStore {
    #[cfg_attr(not(feature = "keychain"), allow(dead_code))]
    service: String,
}

impl KeyringStore {
    pub fn new() -> Self {
        Self::with_service(credentials::SERVICE_NAME)
    }

    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "keychain")]
impl KeyringStore {
    fn entry(&self, account: &str) -> Result<keyring::Entry, LinearError> {
        keyring::Entry::new(&self.service, account)
            .map_err(|e| LinearError::CredentialStorage(e.to_string()))
    }
}

#[cfg(feature = "keychain")]
impl CredentialStore for KeyringStore {
    fn get(&self, account: &str) -> Result<Option<String>, LinearError> {
        log::debug!("Looking up credential for account {}", account);
        match self.entry(account)?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(LinearError::CredentialStorage(e.to_string())),
        }
    }

    fn set(&self, account: &str, secret: &str) -> Result<(), LinearError> {
        self.entry(account)?
            .set_password(secret)
            .map_err(|e| LinearError::CredentialStorage(e.to_string()))
    }

    fn delete(&self, account: &str) -> Result<(), LinearError> {
        self.entry(account)?
            .delete_credential()
            .map_err(|e| LinearError::CredentialStorage(e.to_string()))
    }
}

#[cfg(not(feature = "keychain"))]
impl CredentialStore for KeyringStore {
    fn get(&self, _account: &str) -> Result<Option<String>, LinearError> {
        Err(LinearError::CredentialStorage(
            "keychain feature not enabled".to_string(),
        ))
    }

    fn set(&self, _account: &str, _secret: &str) -> Result<(), LinearError> {
        Err(LinearError::CredentialStorage(
            "keychain feature not enabled".to_string(),
        ))
    }

    fn delete(&self, _account: &str) -> Result<(), LinearError> {
        Err(LinearError::CredentialStorage(
            "keychain feature not enabled".to_string(),
        ))
    }
}

/// Process-local store used by tests and headless runs
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for InMemoryStore {
    fn get(&self, account: &str) -> Result<Option<String>, LinearError> {
        Ok(self.lock().get(account).cloned())
    }

    fn set(&self, account: &str, secret: &str) -> Result<(), LinearError> {
        self.lock().insert(account.to_string(), secret.to_string());
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<(), LinearError> {
        match self.lock().remove(account) {
            Some(_) => Ok(()),
            None => Err(LinearError::CredentialStorage(format!(
                "No credential stored for {}",
                account
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_name() {
        assert_eq!(account_name("acme"), "workspace-acme");
        assert_eq!(account_name("default"), "workspace-default");
    }

    #[test]
    fn test_in_memory_last_write_wins() {
        let store = InMemoryStore::new();
        store.set("workspace-a", "first").unwrap();
        store.set("workspace-a", "second").unwrap();

        assert_eq!(store.get("workspace-a").unwrap(), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_in_memory_missing_entry() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("workspace-missing").unwrap(), None);
        assert!(store.delete("workspace-missing").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_in_memory_delete() {
        let store = InMemoryStore::new();
        store.set("workspace-a", "token").unwrap();
        store.delete("workspace-a").unwrap();
        assert_eq!(store.get("workspace-a").unwrap(), None);
    }

    #[cfg(feature = "keychain")]
    #[test]
    #[ignore] // Run with: cargo test -- --ignored
    fn test_keyring_operations() {
        // Requires keychain access; use a test-specific service name
        let store = KeyringStore::with_service("linear-cli-test");
        let account = account_name("keyring-test");
        let _ = store.delete(&account);

        match store.set(&account, "test-token-12345") {
            Ok(()) => {
                assert_eq!(
                    store.get(&account).unwrap(),
                    Some("test-token-12345".to_string())
                );
                store.delete(&account).unwrap();
                assert_eq!(store.get(&account).unwrap(), None);
            }
            Err(_) => eprintln!("Warning: Could not store token in keyring"),
        }
    }

    #[cfg(not(feature = "keychain"))]
    #[test]
    fn test_keychain_disabled_fallback() {
        let store = KeyringStore::new();
        assert!(store.set("workspace-a", "test").is_err());
        assert!(store.get("workspace-a").is_err());
        assert!(store.delete("workspace-a").is_err());
    }
}

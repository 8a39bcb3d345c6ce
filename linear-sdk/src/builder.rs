// ABOUTME: Builder pattern implementation for LinearClient configuration
// ABOUTME: Provides type-safe configuration with compile-time validation

use crate::LinearClient;
use crate::constants::{timeouts, urls};
use crate::error::LinearError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LinearClient, LinearError>))]
pub struct LinearClientConfig {
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = timeouts::UPLOAD_TIMEOUT)]
    pub upload_timeout: Duration,

    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<LinearClientConfig> for Result<LinearClient, LinearError> {
    fn from(config: LinearClientConfig) -> Self {
        LinearClient::from_config(config)
    }
}

impl LinearClient {
    pub fn builder() -> LinearClientConfigBuilder<((), (), (), ())> {
        LinearClientConfig::builder()
    }
}

impl LinearClientConfig {
    /// Full GraphQL endpoint URL derived from the base URL
    pub fn graphql_endpoint(&self) -> Result<Url, LinearError> {
        let base = self.base_url.as_deref().unwrap_or(urls::LINEAR_API_BASE);
        graphql_endpoint(base)
    }
}

pub(crate) fn graphql_endpoint(base: &str) -> Result<Url, LinearError> {
    let parsed = Url::parse(base)
        .map_err(|e| LinearError::Configuration(format!("Invalid API URL '{}': {}", base, e)))?;

    let trimmed = parsed.as_str().trim_end_matches('/');
    Url::parse(&format!("{}{}", trimmed, urls::GRAPHQL_PATH))
        .map_err(|e| LinearError::Configuration(format!("Invalid API URL '{}': {}", base, e)))
}

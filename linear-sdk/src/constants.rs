// ABOUTME: Centralized constants for the Linear SDK
// ABOUTME: Contains API URLs, timeouts, credential store naming and upload defaults

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for binary uploads to the storage URL
    pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(120);
}

/// Linear API URLs
pub mod urls {
    /// Base URL for Linear API
    pub const LINEAR_API_BASE: &str = "https://api.linear.app";

    /// Path of the GraphQL endpoint relative to the base URL
    pub const GRAPHQL_PATH: &str = "/graphql";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV: &str = "LINEAR_API_URL";
}

/// Credential store naming
pub mod credentials {
    /// Service name every workspace token is stored under
    pub const SERVICE_NAME: &str = "linear-cli";

    /// Prefix of the per-workspace account name
    pub const ACCOUNT_PREFIX: &str = "workspace-";
}

/// File upload defaults
pub mod upload {
    /// Cache-Control header sent with every upload unless the API overrides it
    pub const CACHE_CONTROL: &str = "public, max-age=31536000";

    /// Content type used when the extension is unknown
    pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
}

pub const USER_AGENT: &str = concat!("lin/", env!("CARGO_PKG_VERSION"));

// ABOUTME: Linear SDK library providing a GraphQL client for the Linear API
// ABOUTME: Includes per-workspace authentication, credential storage, queries and mutations

pub mod auth;
pub mod builder;
pub mod constants;
pub mod error;
pub mod graphql;
pub mod models;
pub mod queries;
pub mod storage;
pub mod upload;

#[cfg(test)]
mod test_helpers;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

pub use auth::WorkspaceAuth;
pub use builder::LinearClientConfig;
pub use error::LinearError;
pub use graphql::GraphQLRequest;
pub use models::*;
pub use storage::{CredentialStore, InMemoryStore, KeyringStore};

pub type Result<T, E = LinearError> = std::result::Result<T, E>;

/// Priority labels indexed by Linear's numeric priority
pub const PRIORITY_NAMES: [&str; 5] = ["None", "Urgent", "High", "Medium", "Low"];

pub fn priority_label(priority: Option<f64>) -> &'static str {
    priority
        .filter(|p| *p >= 0.0)
        .and_then(|p| PRIORITY_NAMES.get(p as usize).copied())
        .unwrap_or(PRIORITY_NAMES[0])
}

pub struct LinearClient {
    client: reqwest::Client,
    upload_client: reqwest::Client,
    endpoint: Url,
}

impl LinearClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::builder()
            .auth_token(SecretString::new(api_key.into_boxed_str()))
            .build()
    }

    pub fn from_config(config: LinearClientConfig) -> Result<Self> {
        let endpoint = config.graphql_endpoint()?;

        // Token goes out verbatim; Linear personal API keys take no scheme prefix
        let mut auth_value = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|_| {
                LinearError::Configuration("API token contains invalid characters".to_string())
            })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        // Storage URLs are presigned; they must never see the API token
        let upload_client = reqwest::Client::builder()
            .timeout(config.upload_timeout)
            .build()?;

        Ok(Self {
            client,
            upload_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one GraphQL request and decode its `data` payload
    pub async fn execute<T: DeserializeOwned>(&self, request: &GraphQLRequest) -> Result<T> {
        log::debug!(
            "POST {} operation={}",
            self.endpoint,
            request.operation_name()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("{} -> HTTP {}", request.operation_name(), status.as_u16());

        if !status.is_success() {
            // Linear reports validation failures as 400 with a normal errors array
            if let Ok(envelope) =
                serde_json::from_str::<graphql::GraphQLResponse<serde_json::Value>>(&body)
            {
                if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
                    return Err(LinearError::GraphQL(graphql::join_messages(&errors)));
                }
            }

            return Err(match status.as_u16() {
                401 => LinearError::Auth,
                429 => LinearError::RateLimit,
                code => LinearError::Api {
                    status: code,
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                },
            });
        }

        graphql::decode(&body)
    }

    pub async fn viewer(&self) -> Result<ViewerData> {
        self.execute(&GraphQLRequest::new(queries::VIEWER)).await
    }

    /// Look up an issue by identifier (`ENG-123`) or opaque ID
    pub async fn get_issue(&self, issue_id: &str) -> Result<Option<Issue>> {
        let request = GraphQLRequest::new(queries::GET_ISSUE).variable("issueId", issue_id);
        match self.execute::<IssueData>(&request).await {
            Ok(data) => Ok(data.issue),
            Err(LinearError::GraphQL(msg)) if is_not_found(&msg) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Resolve a human-readable identifier to the issue, failing when it does not exist
    pub async fn resolve_issue(&self, identifier: &str) -> Result<Issue> {
        self.get_issue(identifier)
            .await?
            .ok_or_else(|| LinearError::IssueNotFound(identifier.to_string()))
    }

    pub async fn get_issue_comments(&self, issue_id: &str) -> Result<IssueCommentsData> {
        let request =
            GraphQLRequest::new(queries::GET_ISSUE_COMMENTS).variable("issueId", issue_id);
        self.execute(&request).await
    }

    pub async fn create_issue(&self, input: &IssueCreateInput) -> Result<IssueCreateData> {
        let request = GraphQLRequest::new(queries::CREATE_ISSUE).variable("input", input);
        self.execute(&request).await
    }

    pub async fn update_issue(
        &self,
        issue_id: &str,
        input: &IssueUpdateInput,
    ) -> Result<IssueUpdateData> {
        let request = GraphQLRequest::new(queries::UPDATE_ISSUE)
            .variable("issueId", issue_id)
            .variable("input", input);
        self.execute(&request).await
    }

    pub async fn delete_issue(&self, issue_id: &str) -> Result<IssueDeleteData> {
        let request = GraphQLRequest::new(queries::DELETE_ISSUE).variable("issueId", issue_id);
        self.execute(&request).await
    }

    pub async fn search_issues(
        &self,
        term: &str,
        limit: i32,
        filter: Option<&IssueFilter>,
    ) -> Result<SearchIssuesData> {
        let request = GraphQLRequest::new(queries::search_issues())
            .variable("term", term)
            .variable("first", limit)
            .variable("filter", filter);
        self.execute(&request).await
    }

    pub async fn list_issues(
        &self,
        limit: i32,
        filter: Option<&IssueFilter>,
    ) -> Result<IssuesData> {
        let request = GraphQLRequest::new(queries::list_issues())
            .variable("first", limit)
            .variable("filter", filter);
        self.execute(&request).await
    }

    pub async fn get_workflow_states(&self, team_id: &str) -> Result<WorkflowStatesData> {
        let request = GraphQLRequest::new(queries::WORKFLOW_STATES).variable("teamId", team_id);
        self.execute(&request).await
    }

    pub async fn create_comment(&self, issue_id: &str, body: &str) -> Result<CommentCreateData> {
        let request = GraphQLRequest::new(queries::CREATE_COMMENT)
            .variable("input", json!({ "issueId": issue_id, "body": body }));
        self.execute(&request).await
    }

    pub async fn update_comment(&self, comment_id: &str, body: &str) -> Result<CommentUpdateData> {
        let request = GraphQLRequest::new(queries::UPDATE_COMMENT)
            .variable("commentId", comment_id)
            .variable("input", json!({ "body": body }));
        self.execute(&request).await
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<CommentDeleteData> {
        let request =
            GraphQLRequest::new(queries::DELETE_COMMENT).variable("commentId", comment_id);
        self.execute(&request).await
    }

    pub async fn get_projects(&self, limit: i32, include_archived: bool) -> Result<ProjectsData> {
        let request = GraphQLRequest::new(queries::GET_PROJECTS)
            .variable("first", limit)
            .variable("includeArchived", include_archived);
        self.execute(&request).await
    }

    pub async fn get_teams(&self, limit: i32) -> Result<TeamsData> {
        let request = GraphQLRequest::new(queries::GET_TEAMS).variable("first", limit);
        self.execute(&request).await
    }

    pub async fn get_users(&self, limit: i32) -> Result<UsersData> {
        let request = GraphQLRequest::new(queries::GET_USERS).variable("first", limit);
        self.execute(&request).await
    }

    pub async fn create_attachment(
        &self,
        issue_id: &str,
        url: &str,
        title: &str,
        subtitle: Option<&str>,
    ) -> Result<AttachmentCreateData> {
        let mut input = json!({ "issueId": issue_id, "url": url, "title": title });
        if let Some(subtitle) = subtitle {
            input["subtitle"] = json!(subtitle);
        }

        let request = GraphQLRequest::new(queries::CREATE_ATTACHMENT).variable("input", input);
        self.execute(&request).await
    }
}

fn is_not_found(message: &str) -> bool {
    message.to_lowercase().contains("not found")
}

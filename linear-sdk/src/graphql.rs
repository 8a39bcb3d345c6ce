// ABOUTME: GraphQL request builder and response envelope handling
// ABOUTME: Turns the {data, errors} envelope into a single Result for callers

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LinearError;

/// A GraphQL operation plus its variables, serialized as the POST body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    query: String,
    variables: Map<String, Value>,
}

impl GraphQLRequest {
    /// Create a new request for a query or mutation document
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Add a variable to the request
    pub fn variable<T: Serialize>(mut self, name: impl Into<String>, value: T) -> Self {
        let name = name.into();
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Variable {} could not be serialized, sending null: {}", name, e);
                Value::Null
            }
        };
        self.variables.insert(name, value);
        self
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// Operation name used for logging, e.g. `GetIssue`
    pub fn operation_name(&self) -> &str {
        self.query
            .split_whitespace()
            .skip_while(|word| *word != "query" && *word != "mutation")
            .nth(1)
            .map(|name| name.split(['(', '{']).next().unwrap_or(name))
            .filter(|name| !name.is_empty())
            .unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorMessage {
    pub message: String,
}

/// Raw `{ data, errors }` response body
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLErrorMessage>>,
}

impl<T> GraphQLResponse<T> {
    /// A non-empty `errors` array always fails, even when `data` is present
    pub fn into_result(self) -> Result<T, LinearError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(LinearError::GraphQL(join_messages(&errors)));
        }

        self.data
            .ok_or_else(|| LinearError::InvalidResponse("No data in response".to_string()))
    }
}

pub(crate) fn join_messages(errors: &[GraphQLErrorMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, LinearError> {
    let envelope: GraphQLResponse<T> = serde_json::from_str(body)?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let request = GraphQLRequest::new("query GetTeams($first: Int) { teams { nodes { id } } }")
            .variable("first", 10)
            .variable("after", "cursor");

        assert_eq!(request.variables().len(), 2);
        assert_eq!(request.variables()["first"], json!(10));

        let body = serde_json::to_value(&request).unwrap();
        assert!(body["query"].as_str().unwrap().contains("teams"));
        assert_eq!(body["variables"]["after"], "cursor");
    }

    #[test]
    fn test_unserializable_variable_becomes_null() {
        // Map keys must be strings in JSON
        let mut bad = std::collections::BTreeMap::new();
        bad.insert((1u8, 2u8), "x");

        let request = GraphQLRequest::new("query { viewer { id } }")
            .variable("bad", bad)
            .variable("good", true);

        assert_eq!(request.variables()["bad"], Value::Null);
        assert_eq!(request.variables()["good"], json!(true));
    }

    #[test]
    fn test_empty_variables_serialize_as_object() {
        let body = serde_json::to_value(GraphQLRequest::new("query { viewer { id } }")).unwrap();
        assert_eq!(body["variables"], json!({}));
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(
            GraphQLRequest::new("query GetIssue($id: String!) { issue(id: $id) { id } }")
                .operation_name(),
            "GetIssue"
        );
        assert_eq!(
            GraphQLRequest::new("\n  mutation UpdateIssue($id: String!) {}").operation_name(),
            "UpdateIssue"
        );
        assert_eq!(
            GraphQLRequest::new("query { viewer { id } }").operation_name(),
            "anonymous"
        );
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let body = json!({
            "data": { "viewer": { "id": "1" } },
            "errors": [{ "message": "first" }, { "message": "second" }]
        })
        .to_string();

        let result = decode::<Value>(&body);
        match result {
            Err(LinearError::GraphQL(msg)) => assert_eq!(msg, "first, second"),
            other => panic!("Expected GraphQL error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let body = json!({ "data": { "ok": true }, "errors": [] }).to_string();
        let data: Value = decode(&body).unwrap();
        assert_eq!(data["ok"], true);
    }

    #[test]
    fn test_missing_data() {
        let result = decode::<Value>("{}");
        assert!(matches!(result, Err(LinearError::InvalidResponse(_))));
    }
}

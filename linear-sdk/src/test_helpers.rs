// ABOUTME: Test helper utilities for mocking Linear API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

use mockito::{Server, ServerGuard};
use serde_json::json;

pub async fn mock_linear_server() -> ServerGuard {
    Server::new_async().await
}

pub fn mock_viewer_response() -> serde_json::Value {
    json!({
        "data": {
            "viewer": {
                "id": "test-user-id",
                "name": "Test User"
            }
        }
    })
}

pub fn mock_null_viewer_response() -> serde_json::Value {
    json!({
        "data": {
            "viewer": null
        }
    })
}

pub fn mock_issues_response() -> serde_json::Value {
    json!({
        "data": {
            "issues": {
                "nodes": [
                    {
                        "id": "issue-1",
                        "identifier": "ENG-1",
                        "title": "Fix login race condition",
                        "priority": 1.0,
                        "state": { "name": "Todo", "type": "unstarted" },
                        "assignee": { "name": "Alice", "email": "alice@example.com" },
                        "team": { "id": "team-eng", "name": "Engineering", "key": "ENG" }
                    },
                    {
                        "id": "issue-2",
                        "identifier": "DES-2",
                        "title": "Refresh onboarding screens",
                        "priority": 3.0,
                        "state": { "name": "In Progress", "type": "started" },
                        "assignee": { "name": "Bob", "email": null },
                        "team": { "id": "team-design", "name": "Design", "key": "DES" }
                    },
                    {
                        "id": "issue-3",
                        "identifier": "QA-3",
                        "title": "Regression pass",
                        "priority": 0.0,
                        "state": { "name": "Done", "type": "completed" },
                        "assignee": null,
                        "team": { "id": "team-qa", "name": "Quality", "key": "QA" }
                    }
                ]
            }
        }
    })
}

pub fn mock_error_response() -> serde_json::Value {
    json!({
        "errors": [
            {
                "message": "Authentication required",
                "extensions": {
                    "code": "UNAUTHENTICATED"
                }
            }
        ]
    })
}

pub fn mock_graphql_error_response() -> serde_json::Value {
    json!({
        "errors": [
            {
                "message": "Cannot query field 'unknown' on type 'Query'",
                "locations": [{ "line": 2, "column": 3 }],
                "extensions": {
                    "code": "GRAPHQL_VALIDATION_FAILED"
                }
            }
        ]
    })
}

pub fn mock_detailed_issue_response() -> serde_json::Value {
    json!({
        "data": {
            "issue": {
                "id": "issue-detailed-123",
                "identifier": "ENG-123",
                "title": "Fix login race condition",
                "description": "Users hit a race when logging in from two devices.",
                "priority": 2.0,
                "state": { "name": "In Progress", "type": "started" },
                "assignee": { "name": "John Doe", "email": "john@example.com" },
                "creator": { "name": "Jane Roe", "email": "jane@example.com" },
                "team": { "id": "team-eng", "name": "Engineering", "key": "ENG" },
                "project": { "id": "project-web", "name": "Web App" },
                "createdAt": "2024-01-15T10:30:00Z",
                "updatedAt": "2024-01-16T14:45:00Z",
                "url": "https://linear.app/test/issue/ENG-123"
            }
        }
    })
}

pub fn mock_issue_not_found_response() -> serde_json::Value {
    json!({
        "data": {
            "issue": null
        }
    })
}

pub fn mock_create_issue_failure_response() -> serde_json::Value {
    json!({
        "data": {
            "issueCreate": {
                "success": false,
                "issue": null
            }
        }
    })
}

pub fn mock_teams_response() -> serde_json::Value {
    json!({
        "data": {
            "teams": {
                "nodes": [
                    {
                        "id": "team-eng",
                        "key": "ENG",
                        "name": "Engineering",
                        "description": "Product development"
                    },
                    {
                        "id": "team-design",
                        "key": "DES",
                        "name": "Design",
                        "description": "Product design and user experience"
                    },
                    {
                        "id": "team-qa",
                        "key": "QA",
                        "name": "Quality",
                        "description": null
                    }
                ]
            }
        }
    })
}

pub fn mock_entity_not_found_response() -> serde_json::Value {
    json!({
        "errors": [
            {
                "message": "Entity not found: Issue",
                "extensions": {
                    "code": "INPUT_ERROR"
                }
            }
        ],
        "data": null
    })
}

pub fn mock_update_issue_response() -> serde_json::Value {
    json!({
        "data": {
            "issueUpdate": {
                "success": true,
                "issue": {
                    "id": "uuid-1",
                    "identifier": "ENG-123",
                    "title": "Renamed",
                    "description": null,
                    "priority": 2.0,
                    "state": {
                        "name": "Todo",
                        "type": "unstarted"
                    },
                    "project": null
                }
            }
        }
    })
}

pub fn mock_file_upload_response(upload_url: &str) -> serde_json::Value {
    json!({
        "data": {
            "fileUpload": {
                "success": true,
                "uploadFile": {
                    "uploadUrl": upload_url,
                    "assetUrl": "https://uploads.linear.app/asset/screenshot.png",
                    "headers": [
                        { "key": "x-goog-meta-origin", "value": "lin" },
                        { "key": "Cache-Control", "value": "private" }
                    ]
                }
            }
        }
    })
}

// ABOUTME: Output formatting for list commands: psql-style tables and JSON
// ABOUTME: Also holds the small date, truncation and count helpers the handlers share

use anyhow::Result;
use chrono::{DateTime, Local};
use linear_sdk::{Issue, Project, Team, User, priority_label};
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants::ui;
use crate::types::WorkflowStateType;

const MISSING: &str = "—";

/// Shorten to `max_len` characters, ending with an ellipsis when cut
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// `Found 1 team` / `Found 3 teams`
pub fn found_line(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("Found {} {}", count, noun)
    } else {
        format!("Found {} {}s", count, noun)
    }
}

/// Local calendar date for an RFC 3339 timestamp, or the input unchanged
pub fn format_date(timestamp: Option<&str>) -> String {
    format_timestamp(timestamp, "%Y-%m-%d")
}

/// Local date and time for an RFC 3339 timestamp, or the input unchanged
pub fn format_datetime(timestamp: Option<&str>) -> String {
    format_timestamp(timestamp, "%Y-%m-%d %H:%M")
}

fn format_timestamp(timestamp: Option<&str>, pattern: &str) -> String {
    match timestamp {
        Some(ts) => match DateTime::parse_from_rfc3339(ts) {
            Ok(parsed) => parsed.with_timezone(&Local).format(pattern).to_string(),
            Err(_) => ts.to_string(),
        },
        None => MISSING.to_string(),
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format<T: Serialize>(&self, nodes: &[T]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(nodes)?)
        } else {
            Ok(serde_json::to_string(nodes)?)
        }
    }
}

pub struct TableFormatter {
    use_color: bool,
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Team")]
    team: String,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Project ID")]
    id: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    updated: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Team ID")]
    id: String,
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "User ID")]
    id: String,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn render<R: Tabled>(rows: Vec<R>) -> String {
        let mut table = Table::new(rows);
        table.with(Style::psql());
        table.to_string()
    }

    fn format_status(&self, issue: &Issue) -> String {
        let Some(state) = &issue.state else {
            return MISSING.to_string();
        };
        if !self.use_color {
            return state.name.clone();
        }

        match WorkflowStateType::from(state.kind.as_str()) {
            WorkflowStateType::Started => state.name.yellow().to_string(),
            WorkflowStateType::Completed => state.name.green().to_string(),
            WorkflowStateType::Canceled => state.name.red().to_string(),
            WorkflowStateType::Other(_) => state.name.clone(),
            _ => state.name.dimmed().to_string(),
        }
    }

    fn format_assignee(&self, issue: &Issue) -> String {
        match &issue.assignee {
            Some(user) => user.name.clone(),
            None if self.use_color => "Unassigned".dimmed().to_string(),
            None => "Unassigned".to_string(),
        }
    }

    pub fn format_issues(&self, issues: &[Issue]) -> String {
        let rows = issues
            .iter()
            .map(|issue| IssueRow {
                id: issue.identifier.clone(),
                title: truncate(&issue.title, ui::SEARCH_TITLE_WIDTH),
                status: self.format_status(issue),
                assignee: self.format_assignee(issue),
                priority: priority_label(issue.priority).to_string(),
                team: issue
                    .team
                    .as_ref()
                    .map(|t| t.key.clone())
                    .unwrap_or_else(|| MISSING.to_string()),
            })
            .collect();
        Self::render::<IssueRow>(rows)
    }

    pub fn format_projects(&self, projects: &[Project]) -> String {
        let rows = projects
            .iter()
            .map(|project| {
                let status = if project.archived_at.is_some() {
                    "Archived"
                } else {
                    "Active"
                };
                ProjectRow {
                    name: project.name.clone(),
                    id: project.id.clone(),
                    created: format_date(project.created_at.as_deref()),
                    updated: format_date(project.updated_at.as_deref()),
                    status: if self.use_color && project.archived_at.is_some() {
                        status.dimmed().to_string()
                    } else {
                        status.to_string()
                    },
                }
            })
            .collect();
        Self::render::<ProjectRow>(rows)
    }

    pub fn format_teams(&self, teams: &[Team]) -> String {
        let rows = teams
            .iter()
            .map(|team| TeamRow {
                name: team.name.clone(),
                key: if self.use_color {
                    team.key.bold().to_string()
                } else {
                    team.key.clone()
                },
                id: team.id.clone(),
            })
            .collect();
        Self::render::<TeamRow>(rows)
    }

    pub fn format_users(&self, users: &[User]) -> String {
        let rows = users
            .iter()
            .map(|user| UserRow {
                name: user.name.clone(),
                email: user.email.clone().unwrap_or_default(),
                id: user.id.clone(),
            })
            .collect();
        Self::render::<UserRow>(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(identifier: &str, title: &str, assignee: Option<&str>) -> Issue {
        serde_json::from_value(serde_json::json!({
            "id": format!("id-{}", identifier),
            "identifier": identifier,
            "title": title,
            "priority": 2.0,
            "state": { "name": "In Progress", "type": "started" },
            "assignee": assignee.map(|name| serde_json::json!({ "name": name })),
            "team": { "id": "team-eng", "name": "Engineering", "key": "ENG" }
        }))
        .unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        // Multi-byte input must not split a character
        assert_eq!(truncate("héllo wörld", 6), "héllo…");
    }

    #[test]
    fn test_found_line() {
        assert_eq!(found_line(1, "team"), "Found 1 team");
        assert_eq!(found_line(3, "team"), "Found 3 teams");
        assert_eq!(found_line(0, "issue"), "Found 0 issues");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("not a date")), "not a date");
        assert_eq!(format_date(Some("2024-03-15T12:00:00.000Z")).len(), 10);
    }

    #[test]
    fn test_issue_table_without_color() {
        let formatter = TableFormatter::new(false);
        let long_title = "A very long title that should be truncated because it exceeds the column";
        let output = formatter.format_issues(&[
            issue("ENG-1", "Fix login race", Some("Alice")),
            issue("ENG-2", long_title, None),
        ]);

        assert!(output.contains("ID"));
        assert!(output.contains("Priority"));
        assert!(output.contains("ENG-1"));
        assert!(output.contains("Alice"));
        assert!(output.contains("Unassigned"));
        assert!(output.contains("High"));
        assert!(output.contains("In Progress"));
        assert!(!output.contains("exceeds the column"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_issue_table_with_color() {
        let formatter = TableFormatter::new(true);
        let output = formatter.format_issues(&[issue("ENG-1", "Colored", None)]);
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_team_table() {
        let teams: Vec<Team> = serde_json::from_value(serde_json::json!([
            { "id": "t1", "name": "Engineering", "key": "ENG" },
            { "id": "t2", "name": "Design", "key": "DES", "description": "UI" }
        ]))
        .unwrap();

        let output = TableFormatter::new(false).format_teams(&teams);
        assert!(output.contains("Team ID"));
        assert!(output.contains("Engineering"));
        assert!(output.contains("DES"));
        assert!(output.contains("t2"));
    }

    #[test]
    fn test_project_status_column() {
        let projects: Vec<Project> = serde_json::from_value(serde_json::json!([
            { "id": "p1", "name": "Web", "createdAt": "2024-01-01T00:00:00Z" },
            { "id": "p2", "name": "Old", "archivedAt": "2024-02-01T00:00:00Z" }
        ]))
        .unwrap();

        let output = TableFormatter::new(false).format_projects(&projects);
        assert!(output.contains("Active"));
        assert!(output.contains("Archived"));
    }

    #[test]
    fn test_json_formatter() {
        let users: Vec<User> = serde_json::from_value(serde_json::json!([
            { "id": "u1", "name": "Ada", "email": "ada@example.com", "active": true }
        ]))
        .unwrap();

        let compact = JsonFormatter::new(false).format(&users).unwrap();
        assert!(!compact.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed[0]["email"], "ada@example.com");

        let pretty = JsonFormatter::new(true).format(&users).unwrap();
        assert!(pretty.contains("\n  "));

        let empty: Vec<User> = Vec::new();
        assert_eq!(JsonFormatter::new(false).format(&empty).unwrap(), "[]");
    }
}

// ABOUTME: Domain enums for the lin CLI
// ABOUTME: Workflow state categories with the display order used by `issue state --list`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkflowStateType {
    Triage,
    Backlog,
    Unstarted,
    Started,
    Completed,
    Canceled,
    Other(String),
}

impl From<&str> for WorkflowStateType {
    fn from(s: &str) -> Self {
        match s {
            "triage" => WorkflowStateType::Triage,
            "backlog" => WorkflowStateType::Backlog,
            "unstarted" => WorkflowStateType::Unstarted,
            "started" => WorkflowStateType::Started,
            "completed" => WorkflowStateType::Completed,
            "canceled" | "cancelled" => WorkflowStateType::Canceled,
            other => WorkflowStateType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for WorkflowStateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStateType::Triage => write!(f, "Triage"),
            WorkflowStateType::Backlog => write!(f, "Backlog"),
            WorkflowStateType::Unstarted => write!(f, "Unstarted"),
            WorkflowStateType::Started => write!(f, "Started"),
            WorkflowStateType::Completed => write!(f, "Completed"),
            WorkflowStateType::Canceled => write!(f, "Canceled"),
            WorkflowStateType::Other(s) if s.is_empty() => write!(f, "Other"),
            WorkflowStateType::Other(s) => write!(f, "{}", s),
        }
    }
}

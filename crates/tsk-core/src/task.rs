//! Task model: the persisted record shape plus draft and patch types.
//!
//! Tasks are serialized in camelCase with human-readable status strings:
//!
//! ```json
//! {
//!   "id": "…",
//!   "title": "…",
//!   "description": "…",
//!   "assignedTo": "…",
//!   "status": "Not Started",
//!   "updatedAt": "2026-08-24T10:00:00Z"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a task.
///
/// Any status may transition to any other; there is no state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Returns the wire/display form of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Returns all statuses for iteration (e.g., in pickers).
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not started" | "not-started" | "notstarted" => Ok(TaskStatus::NotStarted),
            "in progress" | "in-progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "unknown status '{other}' (expected 'Not Started', 'In Progress', or 'Completed')"
            )),
        }
    }
}

/// Status filter for listing: `All` is the sentinel that keeps everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Returns true if a task with `status` passes this filter.
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.pad("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// A task record as held in the store and on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, immutable, opaque identifier.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_to: String,
    pub status: TaskStatus,
    /// RFC3339 UTC, refreshed on every creation or mutation.
    pub updated_at: String,
}

/// Input for creating a task; id and timestamp are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub status: TaskStatus,
}

/// An explicit edit: only the fields that are `Some` are merged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.assigned_to.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_format_is_camel_case() {
        let task = Task {
            id: "1734307200001".to_string(),
            title: "Write spec".to_string(),
            description: String::new(),
            assigned_to: "bob".to_string(),
            status: TaskStatus::NotStarted,
            updated_at: "2026-08-24T10:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"assignedTo\":\"bob\""));
        assert!(json.contains("\"updatedAt\":\"2026-08-24T10:00:00Z\""));
        assert!(json.contains("\"status\":\"Not Started\""));
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let json = r#"{
            "id": "42",
            "title": "Deploy",
            "description": "ship it",
            "assignedTo": "alice",
            "status": "In Progress",
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assigned_to, "alice");

        let back = serde_json::to_string(&task).unwrap();
        let again: Task = serde_json::from_str(&back).unwrap();
        assert_eq!(task, again);
    }

    #[test]
    fn test_status_parses_loosely() {
        assert_eq!("Not Started".parse(), Ok(TaskStatus::NotStarted));
        assert_eq!("not-started".parse(), Ok(TaskStatus::NotStarted));
        assert_eq!("IN PROGRESS".parse(), Ok(TaskStatus::InProgress));
        assert_eq!("completed".parse(), Ok(TaskStatus::Completed));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for status in TaskStatus::all() {
            assert!(StatusFilter::All.matches(*status));
        }
    }

    #[test]
    fn test_filter_only_matches_its_status() {
        let filter = StatusFilter::Only(TaskStatus::Completed);
        assert!(filter.matches(TaskStatus::Completed));
        assert!(!filter.matches(TaskStatus::NotStarted));
        assert!(!filter.matches(TaskStatus::InProgress));
    }

    #[test]
    fn test_filter_parses_all_sentinel() {
        assert_eq!("All".parse(), Ok(StatusFilter::All));
        assert_eq!("all".parse(), Ok(StatusFilter::All));
        assert_eq!(
            "Completed".parse(),
            Ok(StatusFilter::Only(TaskStatus::Completed))
        );
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TaskPatch::default().is_empty());
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        assert!(!patch.is_empty());
    }
}

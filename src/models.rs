//! Frontend Models
//!
//! Data structures matching the task API wire format.

use serde::{Deserialize, Serialize};

/// Task lifecycle status, the dimension the board is partitioned by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    InProgress,
    Done,
    /// Wire values this client does not know deserialize here instead of
    /// failing the whole collection; matches no column
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Column order on the board
    pub const COLUMNS: [TaskStatus; 3] = [TaskStatus::New, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "new",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Unknown => "unknown",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::New => "К ВЫПОЛНЕНИЮ",
            TaskStatus::InProgress => "В РАБОТЕ",
            TaskStatus::Done => "ГОТОВО",
            TaskStatus::Unknown => "",
        }
    }

    /// Index of the column rendering this status (None = rendered nowhere)
    pub fn column_index(&self) -> Option<usize> {
        Self::COLUMNS.iter().position(|s| s == self)
    }
}

/// Display-only task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "НИЗКИЙ",
            TaskPriority::Medium => "СРЕДНИЙ",
            TaskPriority::High => "ВЫСОКИЙ",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskPriority::Low => "priority-low",
            TaskPriority::Medium => "priority-medium",
            TaskPriority::High => "priority-high",
        }
    }
}

/// Task data structure (matches backend serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_at: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_to_username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_round_trip() {
        let cases = [
            (TaskStatus::New, "\"new\""),
            (TaskStatus::InProgress, "\"in_progress\""),
            (TaskStatus::Done, "\"done\""),
        ];
        for (status, wire) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<TaskStatus>(wire).unwrap(), status);
        }
    }

    #[test]
    fn test_unrecognized_status_deserializes_as_unknown() {
        let status: TaskStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, TaskStatus::Unknown);
    }

    #[test]
    fn test_column_index_covers_exactly_the_three_columns() {
        assert_eq!(TaskStatus::New.column_index(), Some(0));
        assert_eq!(TaskStatus::InProgress.column_index(), Some(1));
        assert_eq!(TaskStatus::Done.column_index(), Some(2));
        assert_eq!(TaskStatus::Unknown.column_index(), None);
    }

    #[test]
    fn test_task_with_missing_optional_fields() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Проверить отчёт",
                "status": "new",
                "priority": "medium",
                "created_at": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.description, "");
        assert!(task.due_date.is_none());
        assert!(task.assigned_to_username.is_none());
    }

    #[test]
    fn test_task_collection_survives_unknown_status_entries() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "A", "status": "new", "priority": "low", "created_at": "2024-05-01T10:00:00Z"},
                {"id": 2, "title": "B", "status": "archived", "priority": "high", "created_at": "2024-05-01T10:00:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].status, TaskStatus::Unknown);
    }
}

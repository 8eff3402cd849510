use std::fmt;

use serde::{Deserialize, Serialize};

use crate::workers::Specialization;

/// Status of a generated task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting in a worker queue
    #[default]
    Pending,
    /// Head of a working worker's queue
    InProgress,
    /// Finished by its worker
    Complete,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Complete => write!(f, "complete"),
        }
    }
}

/// Task priority derived from its description
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Classify a task description by keyword.
    pub fn for_description(description: &str) -> Self {
        let desc = description.to_lowercase();
        if ["setup", "authentication", "security", "core"]
            .iter()
            .any(|k| desc.contains(k))
        {
            Priority::High
        } else if ["implement", "add", "configure"]
            .iter()
            .any(|k| desc.contains(k))
        {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A unit of synthetic work assigned to exactly one worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential id within one distribution run, starting at 1
    pub id: u32,
    /// What the task is about
    pub description: String,
    /// Specialization of the owning worker
    pub specialization: Specialization,
    /// Id of the owning worker
    pub assigned_to: u32,
    pub priority: Priority,
    /// Informational estimate in hours
    pub estimated_hours: u32,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Mark the task as being worked on. Only pending tasks move.
    pub fn begin(&mut self) {
        if self.status == TaskStatus::Pending {
            self.status = TaskStatus::InProgress;
        }
    }

    /// Mark the task as done. Completed tasks stay complete.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(description: &str) -> Task {
        Task {
            id: 1,
            description: description.to_string(),
            specialization: Specialization::Backend,
            assigned_to: 2,
            priority: Priority::for_description(description),
            estimated_hours: 3,
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_priority_keywords() {
        assert_eq!(Priority::for_description("Setup build pipeline"), Priority::High);
        assert_eq!(Priority::for_description("Add authentication"), Priority::High);
        assert_eq!(Priority::for_description("Implement core workflows"), Priority::High);
        assert_eq!(Priority::for_description("Implement data models"), Priority::Medium);
        assert_eq!(Priority::for_description("Configure deployment"), Priority::Medium);
        assert_eq!(Priority::for_description("Write unit tests"), Priority::Low);
        assert_eq!(Priority::for_description("Load testing"), Priority::Low);
    }

    #[test]
    fn test_status_transitions() {
        let mut t = task("Design API architecture");
        t.begin();
        assert_eq!(t.status, TaskStatus::InProgress);
        t.complete();
        assert_eq!(t.status, TaskStatus::Complete);
        t.begin();
        assert_eq!(t.status, TaskStatus::Complete);
    }

    #[test]
    fn test_task_serialization() {
        let json = serde_json::to_value(task("Add versioning")).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["specialization"], "Backend");
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
    }
}

//! Task input contract.
//!
//! The transport delivers each task as a lifecycle status plus an ordered
//! sequence of raw output fragments. The pipeline reads this once and never
//! mutates it; the only status distinction it makes is error vs. not-error.

use serde::{Deserialize, Serialize};

/// Task lifecycle state as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Preparing,
    Submitted,
    Processing,
    Completed,
    Error,
}

impl TaskStatus {
    /// Whether this status signals a task-level failure.
    pub fn is_error(&self) -> bool {
        matches!(self, TaskStatus::Error)
    }

    /// Classify a raw wire status string.
    ///
    /// Upstream tools report composite statuses ("error: processing",
    /// "task error"); anything containing "error" is a failure. Unknown
    /// non-error statuses are treated as still processing.
    pub fn from_wire(status: &str) -> Self {
        let status = status.to_ascii_lowercase();
        if status.contains("error") {
            return TaskStatus::Error;
        }
        match status.as_str() {
            "preparing" => TaskStatus::Preparing,
            "submitted" => TaskStatus::Submitted,
            "completed" | "success" => TaskStatus::Completed,
            _ => TaskStatus::Processing,
        }
    }
}

/// One task's raw result as delivered by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Lifecycle state at render time.
    pub status: TaskStatus,
    /// Raw output chunks in arrival order. May be empty.
    pub fragments: Vec<String>,
}

impl TaskResult {
    pub fn new(status: TaskStatus, fragments: Vec<String>) -> Self {
        Self { status, fragments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_status_error_detection() {
        assert_eq!(TaskStatus::from_wire("error"), TaskStatus::Error);
        assert_eq!(TaskStatus::from_wire("task error: timeout"), TaskStatus::Error);
        assert_eq!(TaskStatus::from_wire("ERROR"), TaskStatus::Error);
        assert_eq!(TaskStatus::from_wire("completed"), TaskStatus::Completed);
    }

    #[test]
    fn test_wire_status_unknown_is_processing() {
        assert_eq!(TaskStatus::from_wire("delegating"), TaskStatus::Processing);
    }
}

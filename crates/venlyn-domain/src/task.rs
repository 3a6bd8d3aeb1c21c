//! Task module - follow-up tasks with due timestamps

use crate::window::TimestampMs;
use crate::CallId;
use std::fmt;

/// Unique identifier for a follow-up task based on UUIDv7
///
/// TaskIds carry a total order (chronological for generated ids), which the
/// SLA engine uses as a deterministic tie-break when two timers have the
/// same remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u128);

impl TaskId {
    /// Generate a new UUIDv7-based TaskId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a TaskId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization and tests.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a TaskId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl serde::Serialize for TaskId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TaskId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a contact based on UUIDv7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u128);

impl ContactId {
    /// Generate a new UUIDv7-based ContactId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ContactId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ContactId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl serde::Serialize for ContactId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ContactId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Lifecycle status of a follow-up task
///
/// `Done` is terminal; a task's remaining time is only meaningful while it
/// is `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task is pending and its SLA timer is live
    Open,

    /// The task has been completed (terminal)
    Done,
}

impl TaskStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Done => "done",
        }
    }
}

/// Priority of a follow-up task, lowest to highest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait
    Low,

    /// Default priority
    Normal,

    /// Should be handled today
    High,

    /// Drop everything
    Urgent,
}

impl TaskPriority {
    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Normal => "normal",
            TaskPriority::High => "high",
            TaskPriority::Urgent => "urgent",
        }
    }
}

/// What a follow-up task is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskLink {
    /// Follow-up on a specific call
    Call(CallId),

    /// Follow-up on a contact without a specific call
    Contact(ContactId),
}

/// A pending action with a due timestamp
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FollowUpTask {
    /// Unique identifier
    pub id: TaskId,

    /// When the task is due (epoch milliseconds)
    pub due_at: TimestampMs,

    /// Lifecycle status
    pub status: TaskStatus,

    /// Priority
    pub priority: TaskPriority,

    /// Associated call or contact, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<TaskLink>,
}

impl FollowUpTask {
    /// Create an open task with normal priority
    pub fn new(id: TaskId, due_at: TimestampMs) -> Self {
        Self {
            id,
            due_at,
            status: TaskStatus::Open,
            priority: TaskPriority::Normal,
            link: None,
        }
    }

    /// Whether the task still has a live SLA timer
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(TaskPriority::Low < TaskPriority::Normal);
        assert!(TaskPriority::Normal < TaskPriority::High);
        assert!(TaskPriority::High < TaskPriority::Urgent);
    }

    #[test]
    fn test_new_task_is_open() {
        let task = FollowUpTask::new(TaskId::from_value(1), 1_000);
        assert!(task.is_open());
        assert_eq!(task.priority, TaskPriority::Normal);
    }

    #[test]
    fn test_done_is_not_open() {
        let mut task = FollowUpTask::new(TaskId::from_value(1), 1_000);
        task.status = TaskStatus::Done;
        assert!(!task.is_open());
    }

    #[test]
    fn test_task_id_tie_break_order() {
        let a = TaskId::from_value(10);
        let b = TaskId::from_value(20);
        assert!(a < b);
    }

    #[test]
    fn test_task_json_round_trip() {
        let task = FollowUpTask {
            id: TaskId::from_value(7),
            due_at: 123_456,
            status: TaskStatus::Open,
            priority: TaskPriority::Urgent,
            link: Some(TaskLink::Call(CallId::from_value(9))),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["status"], "open");
        assert_eq!(json["priority"], "urgent");

        let back: FollowUpTask = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}

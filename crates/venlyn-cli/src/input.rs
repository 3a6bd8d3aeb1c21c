//! JSON input loading.
//!
//! Call and task files are JSON arrays of the domain record shapes; the
//! persistence layer that would normally feed the engines is replaced here
//! by files on disk.

use crate::error::Result;
use std::fs;
use std::path::Path;
use venlyn_domain::{CallRecord, FollowUpTask};

/// Load an array of call records from a JSON file.
pub fn load_calls(path: &Path) -> Result<Vec<CallRecord>> {
    let contents = fs::read_to_string(path)?;
    let calls: Vec<CallRecord> = serde_json::from_str(&contents)?;
    tracing::debug!(count = calls.len(), path = %path.display(), "loaded call records");
    Ok(calls)
}

/// Load an array of follow-up tasks from a JSON file.
pub fn load_tasks(path: &Path) -> Result<Vec<FollowUpTask>> {
    let contents = fs::read_to_string(path)?;
    let tasks: Vec<FollowUpTask> = serde_json::from_str(&contents)?;
    tracing::debug!(count = tasks.len(), path = %path.display(), "loaded follow-up tasks");
    Ok(tasks)
}

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::project::{ToolDirectory, ToolSelection};

/// What a finished pipeline run produced.
///
/// Returned to the caller for display. Nothing here is written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub project: String,
    pub project_root: PathBuf,
    pub scope_file: PathBuf,
    pub tools: ToolSelection,
    pub tool_directories: Vec<ToolDirectory>,
    pub alive_hosts_file: PathBuf,
    pub alive_host_count: usize,
    pub open_ports_file: PathBuf,
    pub open_port_count: usize,
    pub screenshots_taken: bool,
}

impl RunSummary {
    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

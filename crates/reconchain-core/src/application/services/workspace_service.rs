//! Workspace Service - the directory manager.
//!
//! Creates the project root and one directory per selected tool. Creation is
//! idempotent; any filesystem error is fatal to the run.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Project, ToolDirectory, ToolSelection},
    error::ReconResult,
};

/// Directory bookkeeping for a project.
pub struct WorkspaceService {
    filesystem: Arc<dyn Filesystem>,
}

impl WorkspaceService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Ensure `path` exists as a directory, creating missing parents.
    pub fn ensure_dir(&self, path: &Path) -> ReconResult<()> {
        debug!(path = %path.display(), "Ensuring directory");
        self.filesystem.create_dir_all(path)
    }

    /// Create the project root named after `name`.
    #[instrument(skip_all, fields(project = %name))]
    pub fn create_project(&self, name: &str) -> ReconResult<Project> {
        let project = Project::new(name)?;
        self.ensure_dir(project.root())?;
        info!(root = %project.root().display(), "Project directory ready");
        Ok(project)
    }

    /// Create `<project>/<tool>` for every selected tool, in menu order.
    #[instrument(skip_all, fields(project = %project.name(), tools = selection.len()))]
    pub fn create_tool_directories(
        &self,
        project: &Project,
        selection: &ToolSelection,
    ) -> ReconResult<Vec<ToolDirectory>> {
        selection
            .iter()
            .map(|tool| {
                let path = project.tool_dir(tool);
                self.ensure_dir(&path)?;
                Ok(ToolDirectory { tool, path })
            })
            .collect()
    }
}

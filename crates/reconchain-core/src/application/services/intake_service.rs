//! Intake Service - the scope collector and tool selector.
//!
//! Everything the run needs from the user is asked here, in a fixed order:
//! project name, scope file, then one yes/no question per tool.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::ports::{Filesystem, Prompt},
    domain::{Tool, ToolSelection, is_affirmative},
    error::ReconResult,
};

pub const PROJECT_NAME_PROMPT: &str = "Enter the project name: ";
pub const SCOPE_FILE_PROMPT: &str = "Enter the path to the project scope file: ";
pub const SCOPE_FILE_NOT_FOUND: &str = "File not found. Please enter a valid file path.";

/// `Do you want to run <tool>? (yes/no): `
pub fn tool_prompt(tool: Tool) -> String {
    format!("Do you want to run {tool}? (yes/no): ")
}

/// Collects project inputs through a [`Prompt`].
pub struct IntakeService {
    filesystem: Arc<dyn Filesystem>,
}

impl IntakeService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Ask for the project name. The trimmed answer is used as-is.
    pub fn project_name(&self, prompt: &dyn Prompt) -> ReconResult<String> {
        let name = prompt.ask(PROJECT_NAME_PROMPT)?.trim().to_string();
        debug!(project = %name, "Project name entered");
        Ok(name)
    }

    /// Ask for the scope file until the answer names an existing regular file.
    ///
    /// There is no retry limit; only closed input ends the loop early.
    #[instrument(skip_all)]
    pub fn scope_file(&self, prompt: &dyn Prompt) -> ReconResult<PathBuf> {
        loop {
            let answer = prompt.ask(SCOPE_FILE_PROMPT)?;
            let candidate = PathBuf::from(answer.trim());

            if self.filesystem.is_file(&candidate) {
                debug!(scope = %candidate.display(), "Scope file accepted");
                return Ok(candidate);
            }

            debug!(path = %candidate.display(), "Scope file not found");
            prompt.notify(SCOPE_FILE_NOT_FOUND)?;
        }
    }

    /// Ask about every tool in [`Tool::ALL`] order. Only `yes` (any case) selects.
    #[instrument(skip_all)]
    pub fn select_tools(&self, prompt: &dyn Prompt) -> ReconResult<ToolSelection> {
        let mut chosen = Vec::new();

        for tool in Tool::ALL {
            let answer = prompt.ask(&tool_prompt(tool))?;
            let selected = is_affirmative(&answer);
            debug!(%tool, selected, "Tool answer");
            if selected {
                chosen.push(tool);
            }
        }

        Ok(ToolSelection::from_tools(chosen))
    }
}

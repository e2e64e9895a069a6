use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::Tool};

/// Directory holding every nmap artifact of a project.
pub const NMAP_DIR: &str = "nmap";

/// A recon project: a user-chosen name and the directory named after it.
///
/// The name is used verbatim as a relative path. Separators and other unusual
/// characters pass straight through to directory creation; only an empty name
/// is refused, since it would put every artifact in the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    root: PathBuf,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        let root = PathBuf::from(&name);
        Ok(Self { name, root })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<project>/nmap`
    pub fn nmap_dir(&self) -> PathBuf {
        self.root.join(NMAP_DIR)
    }

    /// `<project>/<tool>`
    pub fn tool_dir(&self, tool: Tool) -> PathBuf {
        self.root.join(tool.directory_name())
    }
}

/// The tools the user opted into, always in [`Tool::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolSelection {
    tools: Vec<Tool>,
}

impl ToolSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from any iterator; duplicates are dropped and the
    /// result is reordered to the fixed menu order.
    pub fn from_tools(tools: impl IntoIterator<Item = Tool>) -> Self {
        let mut tools: Vec<Tool> = tools.into_iter().collect();
        tools.sort();
        tools.dedup();
        Self { tools }
    }

    pub fn iter(&self) -> impl Iterator<Item = Tool> + '_ {
        self.tools.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Whether the screenshot stage has to run.
    pub fn wants_screenshots(&self) -> bool {
        self.tools.iter().any(|t| t.takes_screenshots())
    }
}

/// A selected tool and the directory created for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDirectory {
    pub tool: Tool,
    pub path: PathBuf,
}

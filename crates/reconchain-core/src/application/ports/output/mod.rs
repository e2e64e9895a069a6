//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! The `reconchain-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::application::command::{CommandSpec, ExitOutcome};
use crate::error::ReconResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `reconchain_adapters::filesystem::LocalFilesystem` (production)
/// - `reconchain_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ReconResult<()>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> ReconResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ReconResult<String>;

    /// Copy a file byte-for-byte, overwriting `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> ReconResult<()>;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Resolve a path against the current working directory.
    fn absolute(&self, path: &Path) -> ReconResult<PathBuf>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `reconchain_adapters::process::SystemProcessRunner` (production)
/// - `reconchain_adapters::process::ScriptedProcessRunner` (testing)
///
/// A run blocks until the child exits. Spawn failures are errors; a
/// non-zero exit is reported through [`ExitOutcome`] and judged by the caller.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &CommandSpec) -> ReconResult<ExitOutcome>;
}

/// Port for line-based interactive input.
///
/// Implemented by:
/// - `reconchain_cli::prompt::TerminalPrompt` (stdin/stdout)
/// - `reconchain_adapters::prompt::ScriptedPrompt` (testing)
pub trait Prompt: Send + Sync {
    /// Show `question` and return the answer line without its line ending.
    ///
    /// End of input is an [`ApplicationError::InputClosed`](crate::application::ApplicationError::InputClosed)
    /// error, never an empty answer.
    fn ask(&self, question: &str) -> ReconResult<String>;

    /// Show a message that needs no answer.
    fn notify(&self, message: &str) -> ReconResult<()>;
}

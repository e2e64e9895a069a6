//! Application layer errors.
//!
//! These errors represent failures in orchestration: the filesystem, the
//! external tools, and the interactive input. None of them is retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command ran but exited unsuccessfully.
    #[error("Command `{command}` failed ({})", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command could not be started at all.
    #[error("Could not start `{program}`: {reason}")]
    CommandUnavailable { program: String, reason: String },

    /// Standard input closed while a question was pending.
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Reading or writing the interactive prompt failed.
    #[error("Prompt I/O failed: {reason}")]
    PromptFailed { reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("External command failed: {}", command),
                "Check the command output above for details".into(),
                "SYN scans need root: make sure sudo can run nmap".into(),
            ],
            Self::CommandUnavailable { program, .. } => vec![
                format!("'{}' could not be executed", program),
                "Ensure the command is installed and in your PATH".into(),
                "Or point reconchain at it via the [tools] config section".into(),
            ],
            Self::InputClosed { .. } => vec![
                "Standard input ended before all questions were answered".into(),
                "Run reconchain from an interactive terminal or pipe every answer".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned | Self::PromptFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::CommandFailed { .. } | Self::CommandUnavailable { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::InputClosed { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_mentions_exit_code() {
        let err = ApplicationError::CommandFailed {
            command: "nmap -sn".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "Command `nmap -sn` failed (exit code 1)");
    }

    #[test]
    fn signal_termination_is_described() {
        let err = ApplicationError::CommandFailed {
            command: "docker run".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn closed_input_is_a_user_error() {
        let err = ApplicationError::InputClosed {
            prompt: "Enter the project name: ".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}

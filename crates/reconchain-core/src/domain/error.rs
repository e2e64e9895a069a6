use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project name was empty after trimming.
    #[error("Project name is empty")]
    EmptyProjectName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "The project name becomes the project directory, so it cannot be blank".into(),
                "Example: acme-external".into(),
            ],
        }
    }
}

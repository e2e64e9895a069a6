//! Infrastructure adapters for reconchain.
//!
//! This crate implements the ports defined in `reconchain-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ScriptedProcessRunner, ScriptedResponse, SystemProcessRunner};
pub use prompt::ScriptedPrompt;

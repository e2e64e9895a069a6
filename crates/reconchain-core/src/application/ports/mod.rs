//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `reconchain-adapters` (and the
//! terminal prompt in `reconchain-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `ProcessRunner`: External tool invocation
//!   - `Prompt`: Interactive questions and notices

pub mod output;

pub use output::{Filesystem, ProcessRunner, Prompt};

#[cfg(test)]
pub use output::{MockFilesystem, MockProcessRunner};

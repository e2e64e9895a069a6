//! Application layer for reconchain.
//!
//! This layer contains:
//! - **Services**: One per pipeline component, plus the `PipelineService`
//!   orchestrator
//! - **Ports**: Interface definitions (traits) for the filesystem, external
//!   processes and interactive input
//! - **Commands**: Descriptions of the external tool invocations
//! - **Errors**: Application-specific error types
//!
//! Parsing rules live in `crate::domain`; this layer only sequences I/O.

pub mod command;
pub mod error;
pub mod ports;
pub mod services;

pub use command::{CommandSpec, ExitOutcome, Toolchain};

// Re-export main services
pub use services::{
    FanOutService, IntakeService, PipelineService, RunPlan, ScanService, ScreenshotService,
    StageArtifact, WorkspaceService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProcessRunner, Prompt};

pub use error::ApplicationError;

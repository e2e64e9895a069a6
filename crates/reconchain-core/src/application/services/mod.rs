//! Application services - one per pipeline component.
//!
//! Each stage service wraps exactly one step of the run; [`PipelineService`]
//! strings them together in their fixed order.

pub mod fan_out_service;
pub mod intake_service;
pub mod pipeline_service;
pub mod scan_service;
pub mod screenshot_service;
pub mod workspace_service;

pub use fan_out_service::FanOutService;
pub use intake_service::IntakeService;
pub use pipeline_service::{PipelineService, RunPlan};
pub use scan_service::{ScanService, StageArtifact};
pub use screenshot_service::ScreenshotService;
pub use workspace_service::WorkspaceService;

use tracing::debug;

use crate::{
    application::{ApplicationError, CommandSpec, ports::ProcessRunner},
    error::ReconResult,
};

/// Run a command and turn a non-zero exit into [`ApplicationError::CommandFailed`].
pub(crate) fn run_checked(runner: &dyn ProcessRunner, command: &CommandSpec) -> ReconResult<()> {
    debug!(command = %command, cwd = ?command.current_dir, "Running external command");

    let outcome = runner.run(command)?;
    if outcome.success() {
        Ok(())
    } else {
        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            code: outcome.code,
        }
        .into())
    }
}

//! Process runner backed by `std::process::Command`.

use std::process::Command;

use tracing::{debug, warn};

use reconchain_core::{
    application::{ApplicationError, CommandSpec, ExitOutcome, ports::ProcessRunner},
    error::ReconResult,
};

/// Production runner: spawns the real program and waits for it.
///
/// Standard streams are inherited, so nmap and docker talk to the terminal
/// directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &CommandSpec) -> ReconResult<ExitOutcome> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(dir) = &spec.current_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| {
            warn!(program = %spec.program, error = %e, "Failed to spawn");
            ApplicationError::CommandUnavailable {
                program: spec.program.clone(),
                reason: e.to_string(),
            }
        })?;

        debug!(command = %spec, code = ?status.code(), "Command exited");
        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

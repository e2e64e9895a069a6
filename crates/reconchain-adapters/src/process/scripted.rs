//! Scripted process runner for testing.
//!
//! Each call to `run` pops the next [`ScriptedResponse`], writes the files it
//! describes through the shared [`Filesystem`], and reports its exit status.
//! Every invocation is recorded for later assertions.

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use reconchain_core::{
    application::{ApplicationError, CommandSpec, ExitOutcome, ports::Filesystem, ports::ProcessRunner},
    error::ReconResult,
};

/// What one simulated command does.
#[derive(Debug, Clone)]
pub struct ScriptedResponse {
    exit: ExitOutcome,
    /// `(extension, content)` pairs written next to the `-oA` base.
    outputs: Vec<(String, String)>,
}

impl ScriptedResponse {
    /// Exit with code 0.
    pub fn success() -> Self {
        Self::exit_code(0)
    }

    /// Exit with `code`.
    pub fn exit_code(code: i32) -> Self {
        Self {
            exit: ExitOutcome::from_code(code),
            outputs: Vec::new(),
        }
    }

    /// Write `content` to `<-oA base>.<extension>`.
    pub fn writes_output(mut self, extension: impl Into<String>, content: impl Into<String>) -> Self {
        self.outputs.push((extension.into(), content.into()));
        self
    }
}

/// Test double for [`ProcessRunner`].
#[derive(Clone)]
pub struct ScriptedProcessRunner {
    filesystem: Arc<dyn Filesystem>,
    responses: Arc<Mutex<VecDeque<ScriptedResponse>>>,
    calls: Arc<Mutex<Vec<CommandSpec>>>,
}

impl ScriptedProcessRunner {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the response for the next unanswered invocation.
    pub fn then(self, response: ScriptedResponse) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProcessRunner for ScriptedProcessRunner {
    fn run(&self, command: &CommandSpec) -> ReconResult<ExitOutcome> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(command.clone());

        let response = self
            .responses
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .pop_front()
            .ok_or_else(|| ApplicationError::CommandUnavailable {
                program: command.program.clone(),
                reason: "no scripted response left".into(),
            })?;

        for (extension, content) in &response.outputs {
            let base = command
                .value_of("-oA")
                .ok_or_else(|| ApplicationError::CommandUnavailable {
                    program: command.program.clone(),
                    reason: "scripted output needs an -oA argument".into(),
                })?;
            let path = PathBuf::from(format!("{base}.{extension}"));
            self.filesystem.write_file(&path, content)?;
        }

        Ok(response.exit)
    }
}

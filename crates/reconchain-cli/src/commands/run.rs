//! Implementation of `reconchain run` (also the default with no subcommand).
//!
//! Responsibility: wire the production adapters into the core pipeline and
//! display the result. No pipeline logic lives here.

use std::sync::Arc;

use tracing::{debug, instrument};

use reconchain_adapters::{LocalFilesystem, SystemProcessRunner};
use reconchain_core::application::PipelineService;

use crate::{
    cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager,
    prompt::TerminalPrompt,
};

/// Execute the interactive pipeline against the real filesystem and tools.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let toolchain = config.toolchain();
    debug!(
        nmap = %toolchain.nmap,
        sudo = toolchain.sudo.as_deref().unwrap_or("none"),
        docker = %toolchain.docker,
        "Toolchain resolved"
    );

    let service = PipelineService::new(
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemProcessRunner::new()),
        toolchain,
    );

    // Keep stdout a single JSON document.
    let prompt = TerminalPrompt::stdio(output.format() == OutputFormat::Json);
    let summary = service.run(&prompt)?;
    output.summary(&summary)
}

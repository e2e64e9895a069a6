//! Pipeline Service - main application orchestrator.
//!
//! This service coordinates a full recon run:
//! 1. Ask for the project name and create its directory
//! 2. Ask for the scope file (re-prompting until it exists)
//! 3. Ask which tools to run and create their directories
//! 4. Host discovery, then the port scan, into `<project>/nmap`
//! 5. Copy the port list into every tool directory
//! 6. Screenshots, if gowitness was selected
//!
//! Stages run strictly in that order and the first error ends the run.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, info_span, instrument};
use uuid::Uuid;

use crate::{
    application::{
        Toolchain,
        ports::{Filesystem, ProcessRunner, Prompt},
        services::{FanOutService, IntakeService, ScanService, ScreenshotService, WorkspaceService},
    },
    domain::{Project, RunSummary, Tool, ToolDirectory, ToolSelection},
    error::ReconResult,
};

/// Everything collected before the first external command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub project: Project,
    pub scope_file: PathBuf,
    pub tools: ToolSelection,
    pub tool_directories: Vec<ToolDirectory>,
}

/// Main pipeline service.
pub struct PipelineService {
    workspace: WorkspaceService,
    intake: IntakeService,
    scan: ScanService,
    fan_out: FanOutService,
    screenshot: ScreenshotService,
}

impl PipelineService {
    /// Create a new pipeline service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use reconchain_core::application::{PipelineService, Toolchain};
    ///
    /// let service = PipelineService::new(
    ///     filesystem, // Arc<dyn Filesystem>
    ///     runner,     // Arc<dyn ProcessRunner>
    ///     Toolchain::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn ProcessRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            workspace: WorkspaceService::new(filesystem.clone()),
            intake: IntakeService::new(filesystem.clone()),
            scan: ScanService::new(filesystem.clone(), runner.clone(), toolchain.clone()),
            fan_out: FanOutService::new(filesystem.clone()),
            screenshot: ScreenshotService::new(filesystem, runner, toolchain),
        }
    }

    /// Run the whole pipeline interactively.
    ///
    /// This is the main use case - prompts, then every stage in order.
    pub fn run(&self, prompt: &dyn Prompt) -> ReconResult<RunSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!("run", %run_id);
        let _guard = span.enter();

        let started_at = Utc::now();
        let plan = self.collect(prompt)?;
        self.execute(&plan, run_id, started_at)
    }

    /// Steps 1–3: ask the questions and lay out the directories.
    #[instrument(skip_all)]
    pub fn collect(&self, prompt: &dyn Prompt) -> ReconResult<RunPlan> {
        let name = self.intake.project_name(prompt)?;
        let project = self.workspace.create_project(&name)?;

        let scope_file = self.intake.scope_file(prompt)?;

        let tools = self.intake.select_tools(prompt)?;
        let tool_directories = self.workspace.create_tool_directories(&project, &tools)?;

        info!(
            project = %project.name(),
            scope = %scope_file.display(),
            tools = ?tools.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
            "Run planned"
        );

        Ok(RunPlan {
            project,
            scope_file,
            tools,
            tool_directories,
        })
    }

    /// Steps 4–6: the scan-output pipeline.
    #[instrument(skip_all, fields(project = %plan.project.name()))]
    pub fn execute(
        &self,
        plan: &RunPlan,
        run_id: Uuid,
        started_at: chrono::DateTime<Utc>,
    ) -> ReconResult<RunSummary> {
        let nmap_dir = plan.project.nmap_dir();

        let alive = self.scan.discover_hosts(&plan.scope_file, &nmap_dir)?;
        let ports = self.scan.scan_ports(&alive.path, &nmap_dir)?;

        let destinations: Vec<&PathBuf> = plan.tool_directories.iter().map(|d| &d.path).collect();
        self.fan_out.fan_out(&ports.path, &destinations)?;

        let mut screenshots_taken = false;
        if plan.tools.wants_screenshots() {
            let dir = plan.project.tool_dir(Tool::Gowitness);
            self.screenshot.capture(&dir, &ports.path)?;
            screenshots_taken = true;
        }

        info!(
            alive_hosts = alive.entries,
            open_ports = ports.entries,
            screenshots_taken,
            "Pipeline completed successfully"
        );

        Ok(RunSummary {
            run_id,
            started_at,
            finished_at: Utc::now(),
            project: plan.project.name().to_string(),
            project_root: plan.project.root().to_path_buf(),
            scope_file: plan.scope_file.clone(),
            tools: plan.tools.clone(),
            tool_directories: plan.tool_directories.clone(),
            alive_hosts_file: alive.path,
            alive_host_count: alive.entries,
            open_ports_file: ports.path,
            open_port_count: ports.entries,
            screenshots_taken,
        })
    }
}

//! Screenshot Service - runs gowitness in a container.
//!
//! The tool directory is both the container's `/data` mount and the child's
//! working directory, so the port list is passed by base name only. Our own
//! working directory never changes.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, Toolchain,
        ports::{Filesystem, ProcessRunner},
        services::run_checked,
    },
    error::ReconResult,
};

pub struct ScreenshotService {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn ProcessRunner>,
    toolchain: Toolchain,
}

impl ScreenshotService {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn ProcessRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            toolchain,
        }
    }

    /// Screenshot every `address:port` listed in `targets_file`.
    ///
    /// `tool_dir` must already hold a copy of `targets_file` under the same
    /// base name.
    #[instrument(skip_all, fields(dir = %tool_dir.display()))]
    pub fn capture(&self, tool_dir: &Path, targets_file: &Path) -> ReconResult<()> {
        let list_name = targets_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: targets_file.to_path_buf(),
                reason: "target list has no usable file name".into(),
            })?;

        let mount = self.filesystem.absolute(tool_dir)?;
        let command = self.toolchain.screenshot(&mount, list_name);
        run_checked(self.runner.as_ref(), &command)?;

        info!("Screenshots captured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::application::{
        ExitOutcome,
        ports::{MockFilesystem, MockProcessRunner},
    };

    #[test]
    fn runs_docker_inside_absolute_tool_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_absolute()
            .returning(|p| Ok(PathBuf::from("/work").join(p)));

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| {
                cmd.program == "docker"
                    && cmd.current_dir.as_deref() == Some(Path::new("/work/acme/gowitness"))
                    && cmd.args.contains(&"/work/acme/gowitness:/data".to_string())
                    && cmd.args.last().map(String::as_str) == Some("nmap_processed_output.txt")
            })
            .times(1)
            .returning(|_| Ok(ExitOutcome::SUCCESS));

        let service = ScreenshotService::new(Arc::new(fs), Arc::new(runner), Toolchain::default());
        service
            .capture(
                Path::new("acme/gowitness"),
                Path::new("acme/nmap/nmap_processed_output.txt"),
            )
            .unwrap();
    }
}

//! Scan Service - the discovery and port-scan stages.
//!
//! Both stages follow the same shape:
//! 1. Run nmap with `-oA <dir>/<base>` so every output format lands next to
//!    each other
//! 2. Read back `<base>.gnmap`
//! 3. Filter it into a plain list and write that list in one go

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        Toolchain,
        ports::{Filesystem, ProcessRunner},
        services::run_checked,
    },
    domain::gnmap,
    error::ReconResult,
};

pub const ALIVE_HOSTS_BASE: &str = "alive_hosts";
pub const ALIVE_HOSTS_FILE: &str = "alive_hosts.txt";
pub const OPEN_PORTS_BASE: &str = "open_ports";
pub const PROCESSED_OUTPUT_FILE: &str = "nmap_processed_output.txt";
pub const GNMAP_EXTENSION: &str = "gnmap";

/// A derived plain-text file and how many lines went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageArtifact {
    pub path: PathBuf,
    pub entries: usize,
}

/// Runs nmap and cleans its grepable output.
pub struct ScanService {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn ProcessRunner>,
    toolchain: Toolchain,
}

impl ScanService {
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

    /// Ping-sweep the scope and write `alive_hosts.txt`.
    ///
    /// `output_dir` is created if missing.
    #[instrument(skip_all, fields(scope = %scope_file.display(), out = %output_dir.display()))]
    pub fn discover_hosts(&self, scope_file: &Path, output_dir: &Path) -> ReconResult<StageArtifact> {
        self.filesystem.create_dir_all(output_dir)?;

        let output_base = output_dir.join(ALIVE_HOSTS_BASE);
        let command = self.toolchain.host_discovery(scope_file, &output_base);
        run_checked(self.runner.as_ref(), &command)?;

        let raw = self.filesystem.read_to_string(&gnmap_path(&output_base))?;
        let hosts = gnmap::alive_hosts(&raw);

        let path = output_dir.join(ALIVE_HOSTS_FILE);
        self.filesystem
            .write_file(&path, &gnmap::render_lines(&hosts))?;

        info!(hosts = hosts.len(), "Host discovery finished");
        Ok(StageArtifact {
            path,
            entries: hosts.len(),
        })
    }

    /// SYN-scan every TCP port of the alive hosts and write
    /// `nmap_processed_output.txt` as `address:port` lines.
    #[instrument(skip_all, fields(hosts = %hosts_file.display(), out = %output_dir.display()))]
    pub fn scan_ports(&self, hosts_file: &Path, output_dir: &Path) -> ReconResult<StageArtifact> {
        let output_base = output_dir.join(OPEN_PORTS_BASE);
        let command = self.toolchain.syn_scan(hosts_file, &output_base);
        run_checked(self.runner.as_ref(), &command)?;

        let raw = self.filesystem.read_to_string(&gnmap_path(&output_base))?;
        let ports = gnmap::open_ports(&raw);

        let path = output_dir.join(PROCESSED_OUTPUT_FILE);
        self.filesystem
            .write_file(&path, &gnmap::render_lines(&ports))?;

        info!(open_ports = ports.len(), "Port scan finished");
        Ok(StageArtifact {
            path,
            entries: ports.len(),
        })
    }
}

/// `<base>.gnmap`; nmap appends extensions to `-oA` bases itself.
fn gnmap_path(output_base: &Path) -> PathBuf {
    let mut name = output_base.as_os_str().to_owned();
    name.push(".");
    name.push(GNMAP_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError, ExitOutcome,
        ports::{MockFilesystem, MockProcessRunner},
    };
    use crate::error::ReconError;

    #[test]
    fn gnmap_path_appends_extension() {
        assert_eq!(
            gnmap_path(Path::new("acme/nmap/alive_hosts")),
            PathBuf::from("acme/nmap/alive_hosts.gnmap")
        );
    }

    #[test]
    fn failed_discovery_reads_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(ExitOutcome::from_code(1)));

        let service = ScanService::new(Arc::new(fs), Arc::new(runner), Toolchain::default());
        let err = service
            .discover_hosts(Path::new("scope.txt"), Path::new("acme/nmap"))
            .unwrap_err();

        assert!(matches!(
            err,
            ReconError::Application(ApplicationError::CommandFailed { .. })
        ));
    }

    #[test]
    fn port_scan_writes_cleaned_pairs() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .withf(|p| p == Path::new("acme/nmap/open_ports.gnmap"))
            .returning(|_| {
                Ok("Host: 10.0.0.1 ()\tPorts: 22/open/tcp//ssh///, 80/closed/tcp//http///\n".into())
            });
        fs.expect_write_file()
            .withf(|p, content| {
                p == Path::new("acme/nmap/nmap_processed_output.txt") && content == "10.0.0.1:22"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd.program == "sudo" && cmd.args.first().map(String::as_str) == Some("nmap"))
            .returning(|_| Ok(ExitOutcome::SUCCESS));

        let service = ScanService::new(Arc::new(fs), Arc::new(runner), Toolchain::default());
        let artifact = service
            .scan_ports(Path::new("acme/nmap/alive_hosts.txt"), Path::new("acme/nmap"))
            .unwrap();

        assert_eq!(artifact.entries, 1);
        assert_eq!(artifact.path, PathBuf::from("acme/nmap/nmap_processed_output.txt"));
    }
}

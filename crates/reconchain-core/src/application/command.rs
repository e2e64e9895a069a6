//! External command descriptions.
//!
//! Stages never spawn processes themselves. They describe the invocation as a
//! [`CommandSpec`] and hand it to a [`ProcessRunner`](super::ports::ProcessRunner).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child; `None` inherits ours.
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Value following `flag` in the argument list, if any.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Names of the external programs the pipeline drives.
///
/// The defaults reproduce the stock invocations: plain `nmap` for discovery,
/// `sudo nmap` for the SYN scan and the `leonjza/gowitness` image under
/// `docker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    pub nmap: String,
    /// Privilege wrapper for the SYN scan. `None` runs nmap directly.
    pub sudo: Option<String>,
    pub docker: String,
    pub gowitness_image: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            nmap: "nmap".into(),
            sudo: Some("sudo".into()),
            docker: "docker".into(),
            gowitness_image: "leonjza/gowitness".into(),
        }
    }
}

impl Toolchain {
    /// `nmap -sn -iL <scope> -oA <output_base>`
    pub fn host_discovery(&self, scope_file: &Path, output_base: &Path) -> CommandSpec {
        CommandSpec::new(&self.nmap).args([
            "-sn".to_string(),
            "-iL".to_string(),
            scope_file.display().to_string(),
            "-oA".to_string(),
            output_base.display().to_string(),
        ])
    }

    /// `sudo nmap -sS -p- -iL <hosts> -oA <output_base>`
    pub fn syn_scan(&self, hosts_file: &Path, output_base: &Path) -> CommandSpec {
        let nmap_args = [
            "-sS".to_string(),
            "-p-".to_string(),
            "-iL".to_string(),
            hosts_file.display().to_string(),
            "-oA".to_string(),
            output_base.display().to_string(),
        ];

        match &self.sudo {
            Some(sudo) => CommandSpec::new(sudo).arg(&self.nmap).args(nmap_args),
            None => CommandSpec::new(&self.nmap).args(nmap_args),
        }
    }

    /// `docker run --rm -v <mount>:/data <image> gowitness file -f <list>`, run
    /// from inside `mount`.
    pub fn screenshot(&self, mount: &Path, list_file_name: &str) -> CommandSpec {
        CommandSpec::new(&self.docker)
            .args([
                "run".to_string(),
                "--rm".to_string(),
                "-v".to_string(),
                format!("{}:/data", mount.display()),
                self.gowitness_image.clone(),
                "gowitness".to_string(),
                "file".to_string(),
                "-f".to_string(),
                list_file_name.to_string(),
            ])
            .current_dir(mount)
    }
}

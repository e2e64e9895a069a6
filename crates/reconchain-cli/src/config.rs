//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the [`Toolchain`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables, `RECONCHAIN_<SECTION>__<KEY>`
//!    (e.g. `RECONCHAIN_TOOLS__USE_SUDO=false`)
//! 2. Config file: the `--config` path, otherwise [`AppConfig::config_path`]
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use reconchain_core::application::Toolchain;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "RECONCHAIN";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// External programs the pipeline launches.
    pub tools: ToolsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub nmap: String,
    pub sudo: String,
    /// Prefix the SYN scan with `sudo`.
    pub use_sudo: bool,
    pub docker: String,
    pub gowitness_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            tools: ToolsConfig {
                nmap: toolchain.nmap,
                sudo: toolchain.sudo.unwrap_or_else(|| "sudo".into()),
                use_sudo: true,
                docker: toolchain.docker,
                gowitness_image: toolchain.gowitness_image,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::builder(&path, required)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to merge configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Defaults overlaid with one TOML file.
    fn builder(
        path: &Path,
        required: bool,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        Ok(Config::builder().add_source(defaults).add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(required),
        ))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.reconchain.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "reconchain", "reconchain")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".reconchain.toml"))
    }

    /// The program names and image the pipeline should launch.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            nmap: self.tools.nmap.clone(),
            sudo: self.tools.use_sudo.then(|| self.tools.sudo.clone()),
            docker: self.tools.docker.clone(),
            gowitness_image: self.tools.gowitness_image.clone(),
        }
    }

    /// Look up a single value by its dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "tools.nmap" => self.tools.nmap.clone(),
            "tools.sudo" => self.tools.sudo.clone(),
            "tools.use_sudo" => self.tools.use_sudo.to_string(),
            "tools.docker" => self.tools.docker.clone(),
            "tools.gowitness_image" => self.tools.gowitness_image.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_file(contents: &str) -> anyhow::Result<AppConfig> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        AppConfig::builder(file.path(), true)?
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    #[test]
    fn defaults_reproduce_stock_commands() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.toolchain(), Toolchain::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn disabling_sudo_drops_the_prefix() {
        let mut cfg = AppConfig::default();
        cfg.tools.use_sudo = false;
        assert_eq!(cfg.toolchain().sudo, None);
    }

    #[test]
    fn file_overrides_only_what_it_sets() {
        let cfg = load_file("[tools]\nnmap = \"/opt/nmap/bin/nmap\"\nuse_sudo = false\n").unwrap();
        assert_eq!(cfg.tools.nmap, "/opt/nmap/bin/nmap");
        assert!(!cfg.tools.use_sudo);
        assert_eq!(cfg.tools.docker, "docker");
        assert_eq!(cfg.tools.gowitness_image, "leonjza/gowitness");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(load_file("[tools\nnmap = ").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/reconchain.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("tools.nmap").as_deref(), Some("nmap"));
        assert_eq!(cfg.get("tools.use_sudo").as_deref(), Some("true"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

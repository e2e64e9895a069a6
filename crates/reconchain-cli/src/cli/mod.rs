//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reconchain",
    bin_name = "reconchain",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Chain host discovery, port scanning and screenshots for a project",
    long_about = "reconchain asks for a project name, a scope file and the follow-up \
                  tools to prepare, then runs an nmap ping sweep, a full TCP SYN scan \
                  of the live hosts, and hands the resulting host:port list to every \
                  selected tool directory.",
    after_help = "EXAMPLES:\n\
        \x20 reconchain                      # interactive run in the current directory\n\
        \x20 reconchain -v run               # same, with stage progress on stderr\n\
        \x20 reconchain --output-format json # print the run summary as JSON\n\
        \x20 reconchain completions bash > /usr/share/bash-completion/completions/reconchain",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive recon pipeline.
    #[command(
        about = "Run the recon pipeline (default)",
        after_help = "The pipeline prompts on stdin for:\n\
            \x20 1. the project name (a directory created under the current directory)\n\
            \x20 2. the scope file (asked again until an existing file is given)\n\
            \x20 3. yes/no for gowitness, shodan and nikto"
    )]
    Run,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 reconchain completions bash > ~/.local/share/bash-completion/completions/reconchain\n\
            \x20 reconchain completions zsh  > ~/.zfunc/_reconchain\n\
            \x20 reconchain completions fish > ~/.config/fish/completions/reconchain.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Show configuration",
        after_help = "EXAMPLES:\n\
            \x20 reconchain config\n\
            \x20 reconchain config get tools.nmap\n\
            \x20 RECONCHAIN_TOOLS__USE_SUDO=false reconchain config list"
    )]
    Config(ConfigArgs),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `reconchain completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Arguments for `reconchain config`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// What to show. Without one, prints every value and the default path.
    #[command(subcommand)]
    pub action: Option<ConfigCommands>,
}

/// Subcommands for `reconchain config`.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tools.nmap`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

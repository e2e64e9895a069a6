//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use walkdir::WalkDir;

use reconchain_core::domain::RunSummary;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliResult, IntoCli};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Report a finished run in the resolved format.
    ///
    /// JSON is written even in quiet mode since it is the machine interface.
    pub fn summary(&self, summary: &RunSummary) -> CliResult<()> {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(summary)
                .with_cli_context(|| "serialising run summary")?;
            return self
                .term
                .write_line(&json)
                .with_cli_context(|| "writing run summary");
        }

        self.human_summary(summary)
            .with_cli_context(|| "writing run summary")
    }

    fn human_summary(&self, summary: &RunSummary) -> io::Result<()> {
        self.print("")?;
        self.header(&format!("Recon complete: {}", summary.project))?;
        self.success(&format!(
            "{} live host(s) in {}",
            summary.alive_host_count,
            summary.alive_hosts_file.display()
        ))?;
        self.success(&format!(
            "{} open port(s) in {}",
            summary.open_port_count,
            summary.open_ports_file.display()
        ))?;
        for dir in &summary.tool_directories {
            self.success(&format!("Target list copied to {}", dir.path.display()))?;
        }
        if summary.screenshots_taken {
            self.success("Screenshots captured with gowitness")?;
        }
        self.info(&format!(
            "Finished in {}s (run {})",
            summary.elapsed().num_seconds(),
            summary.run_id
        ))?;

        if self.quiet {
            return Ok(());
        }
        self.print("")?;
        for line in project_tree(&summary.project_root)? {
            self.print(&line)?;
        }
        Ok(())
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Indented listing of everything under `root`, directories suffixed `/`.
fn project_tree(root: &Path) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let name = if entry.depth() == 0 {
            root.display().to_string()
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };
        let suffix = if entry.file_type().is_dir() { "/" } else { "" };
        lines.push(format!("{}{name}{suffix}", "  ".repeat(entry.depth())));
    }
    Ok(lines)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn plain_format_never_colors() {
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn tree_lists_nested_entries_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("acme");
        fs::create_dir_all(root.join("nmap")).unwrap();
        fs::create_dir_all(root.join("nikto")).unwrap();
        fs::write(root.join("nmap/alive_hosts.txt"), "10.0.0.1").unwrap();
        fs::write(root.join("nikto/nmap_processed_output.txt"), "").unwrap();

        let lines = project_tree(&root).unwrap();
        assert_eq!(lines[0], format!("{}/", root.display()));
        assert_eq!(
            &lines[1..],
            &[
                "  nikto/",
                "    nmap_processed_output.txt",
                "  nmap/",
                "    alive_hosts.txt",
            ]
        );
    }

    #[test]
    fn tree_of_missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(project_tree(&temp.path().join("nope")).is_err());
    }
}

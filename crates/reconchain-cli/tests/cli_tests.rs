//! Binary-level tests for the reconchain CLI.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reconchain(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reconchain").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("RECONCHAIN_OUTPUT__NO_COLOR", "true");
    cmd
}

// ── surface ───────────────────────────────────────────────────────────────────

#[test]
fn help_describes_the_pipeline() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scope file"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn completions_mention_the_binary() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reconchain"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment_override() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .env("RECONCHAIN_TOOLS__NMAP", "/opt/nmap/bin/nmap")
        .args(["config", "get", "tools.nmap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/nmap/bin/nmap"));
}

#[test]
fn config_file_is_applied() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("recon.toml");
    fs::write(&file, "[tools]\ngowitness_image = \"mirror/gowitness\"\n").unwrap();

    reconchain(temp.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gowitness_image = \"mirror/gowitness\""))
        .stdout(predicate::str::contains("nmap = \"nmap\""));
}

#[test]
fn unknown_config_key_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .args(["config", "get", "tools.masscan"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn missing_config_file_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .args(["--config", "does-not-exist.toml", "config"])
        .assert()
        .code(4);
}

// ── interactive run ───────────────────────────────────────────────────────────

#[test]
fn closed_stdin_during_scope_prompt_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .write_stdin("acme\nmissing.txt\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Enter the project name: "))
        .stdout(predicate::str::contains(
            "File not found. Please enter a valid file path.",
        ))
        .stderr(predicate::str::contains("Input closed"))
        .stderr(predicate::str::contains("Scope file not found").not());

    assert!(temp.path().join("acme").is_dir());
}

#[test]
fn blank_project_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    reconchain(temp.path())
        .write_stdin("   \nscope.txt\nno\nno\nno\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project name is empty"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn missing_nmap_fails_the_run() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("scope.txt"), "10.0.0.1\n").unwrap();

    reconchain(temp.path())
        .env("RECONCHAIN_TOOLS__NMAP", "reconchain-test-no-such-nmap")
        .write_stdin("acme\nscope.txt\nno\nno\nno\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not start"))
        .stderr(predicate::str::contains("reconchain-test-no-such-nmap"));
}

#[cfg(unix)]
mod fake_nmap {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Writes a `.gnmap` next to the `-oA` base, like nmap would.
    const SCRIPT: &str = r#"#!/bin/sh
out=""
mode=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-oA" ]; then out="$arg"; fi
  case "$arg" in
    -sn) mode=discover ;;
    -sS) mode=ports ;;
  esac
  prev="$arg"
done
if [ "$mode" = "discover" ]; then
  printf 'Host: 10.0.0.1 ()\tStatus: Up\nHost: 10.0.0.2 ()\tStatus: Down\n' > "$out.gnmap"
else
  printf 'Host: 10.0.0.1 ()\tPorts: 22/open/tcp//ssh///, 80/open/tcp//http///, 443/closed/tcp//https///\n' > "$out.gnmap"
fi
"#;

    fn install(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("fake-nmap");
        fs::write(&path, SCRIPT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn full_run_fans_out_open_ports() {
        let temp = TempDir::new().unwrap();
        let nmap = install(temp.path());
        fs::write(temp.path().join("scope.txt"), "10.0.0.0/30\n").unwrap();

        let assert = reconchain(temp.path())
            .env("RECONCHAIN_TOOLS__NMAP", &nmap)
            .env("RECONCHAIN_TOOLS__USE_SUDO", "false")
            .args(["--output-format", "json", "run"])
            .write_stdin("acme\nscope.txt\nno\nyes\nyes\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("Enter the project name: "));

        let summary: serde_json::Value =
            serde_json::from_slice(&assert.get_output().stdout).unwrap();
        assert_eq!(summary["open_port_count"], 2);
        assert_eq!(summary["alive_host_count"], 1);

        let project = temp.path().join("acme");
        assert_eq!(
            fs::read_to_string(project.join("nmap/alive_hosts.txt")).unwrap(),
            "10.0.0.1"
        );
        for tool in ["shodan", "nikto"] {
            assert_eq!(
                fs::read_to_string(project.join(tool).join("nmap_processed_output.txt")).unwrap(),
                "10.0.0.1:22\n10.0.0.1:80",
                "wrong list in {tool}"
            );
        }
        assert!(!project.join("gowitness").exists());
    }

    #[test]
    fn human_summary_lists_the_tree() {
        let temp = TempDir::new().unwrap();
        let nmap = install(temp.path());
        fs::write(temp.path().join("scope.txt"), "10.0.0.1\n").unwrap();

        reconchain(temp.path())
            .env("RECONCHAIN_TOOLS__NMAP", &nmap)
            .env("RECONCHAIN_TOOLS__USE_SUDO", "false")
            .args(["--output-format", "plain"])
            .write_stdin("acme\nscope.txt\nno\nno\nyes\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Recon complete: acme"))
            .stdout(predicate::str::contains("2 open port(s)"))
            .stdout(predicate::str::contains("open_ports.gnmap"));
    }
}

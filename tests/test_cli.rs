//! End-to-end tests for the `validators` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn get_validators_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_validators"))
}

/// Run the binary in `dir`, isolated from the user's config and environment.
fn validators_command(dir: &Path) -> Command {
    let mut cmd = Command::new(get_validators_binary());
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("VALIDATORS_QUIET")
        .env_remove("VALIDATORS_CACHE_TLD")
        .env_remove("RUST_LOG");
    cmd
}

fn run_validators(dir: &Path, args: &[&str]) -> Output {
    validators_command(dir)
        .args(args)
        .output()
        .expect("Failed to run validators")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_check_all_valid_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(
        tmp.path(),
        &["check", "email", "someone@example.com", "a.b@example.org"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("someone@example.com"));
}

#[test]
fn test_check_failure_exits_one() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(tmp.path(), &["check", "ipv4", "10.0.0.1", "999.0.0.1"]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains('✓'));
    assert!(out.contains('✗'));
    assert!(out.contains("999.0.0.1"));
}

#[test]
fn test_check_quiet_only_reports_failures() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(
        tmp.path(),
        &["--quiet", "check", "slug", "my-slug", "Bad Slug"],
    );

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("Bad Slug"));
}

#[test]
fn test_check_json_output() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(
        tmp.path(),
        &[
            "check", "between", "3", "9", "--min", "1", "--max", "5", "--format", "json",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["valid"], false);
    assert_eq!(lines[1]["args"]["max_val"], "5");
}

#[test]
fn test_check_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    let mut child = validators_command(tmp.path())
        .args(["check", "url", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn validators");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"https://example.com\nhttp://foo.bar/?q=Test%20URL\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_check_unknown_validator() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(tmp.path(), &["check", "zipcode", "12345"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown validator"));
}

#[test]
fn test_project_config_sets_defaults() {
    let tmp = TempDir::new().unwrap();

    let output = run_validators(tmp.path(), &["check", "url", "http://localhost:8080"]);
    assert_eq!(output.status.code(), Some(1));

    fs::write(
        tmp.path().join(".validators.yaml"),
        "format: json\ndefaults:\n  simple_host: true\n",
    )
    .unwrap();

    let output = run_validators(tmp.path(), &["check", "url", "http://localhost:8080"]);
    assert!(output.status.success());
    let line: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(line["valid"], true);
}

#[test]
fn test_global_config_is_overridden_by_project() {
    let tmp = TempDir::new().unwrap();
    let global_dir = tmp.path().join("config").join("validators");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.yaml"),
        "format: json\nquiet: true\n",
    )
    .unwrap();
    fs::write(tmp.path().join(".validators.yaml"), "format: text\n").unwrap();

    let output = run_validators(tmp.path(), &["config"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("format: text"));
    assert!(out.contains("quiet: true"));
}

#[test]
fn test_tld_file_replaces_bundled_list() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tlds.txt"), "# custom list\nEXAMPLE\n").unwrap();
    fs::write(
        tmp.path().join(".validators.yaml"),
        "tld_file: tlds.txt\ndefaults:\n  consider_tld: true\n",
    )
    .unwrap();

    let output = run_validators(tmp.path(), &["check", "domain", "site.example"]);
    assert!(output.status.success());

    let output = run_validators(tmp.path(), &["check", "domain", "site.museum"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_lowercase_tld_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tlds.txt"), "# custom list\nexample\n").unwrap();
    fs::write(
        tmp.path().join(".validators.yaml"),
        "tld_file: tlds.txt\ndefaults:\n  consider_tld: true\n",
    )
    .unwrap();

    let output = run_validators(tmp.path(), &["check", "domain", "site.example"]);
    assert!(output.status.success());
}

#[test]
fn test_tld_cache_from_env() {
    let tmp = TempDir::new().unwrap();
    let output = validators_command(tmp.path())
        .env("VALIDATORS_CACHE_TLD", "yes")
        .args([
            "check",
            "domain",
            "example.museum",
            "example.notatld",
            "--consider-tld",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run validators");

    assert_eq!(output.status.code(), Some(1));
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["valid"], false);
}

#[test]
fn test_invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".validators.yaml"), "format: xml\n").unwrap();

    let output = run_validators(tmp.path(), &["check", "slug", "ok"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_list_prints_every_validator() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(tmp.path(), &["list"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), validators::ValidatorKind::ALL.len());
    assert!(out.contains("btc-address"));
    assert!(out.contains("cron"));
}

#[test]
fn test_completion_script() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(tmp.path(), &["completion", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("validators"));
}

#[test]
fn test_version_verbose() {
    let tmp = TempDir::new().unwrap();
    let output = run_validators(tmp.path(), &["version", "--verbose"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("validators "));
    assert!(out.contains("commit:"));
    assert!(out.contains("built:"));
}

//! CLI contract tests for nunit-runner

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn nunit_runner() -> Command {
    Command::cargo_bin("nunit-runner").unwrap()
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "La donna è mobile, qual piuma al vento").unwrap();
}

#[test]
fn test_dry_run_prints_filter_and_files() {
    let ws = TempDir::new().unwrap();
    touch(ws.path(), "aaa/aaa.Tests.dll");

    nunit_runner()
        .args(["run", "--dry-run", "--shell", "posix", "--enable-code-coverage"])
        .args(["--test-files", "**\\*.Tests.dll"])
        .args(["--test-case-filter", "Priority=1|TestCategory=Odd Nightly"])
        .arg("--workspace")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/TestCaseFilter:\"Priority=1|TestCategory=Odd Nightly\"",
        ))
        .stdout(predicate::str::contains("aaa/aaa.Tests.dll"))
        .stdout(predicate::str::contains("/Enablecodecoverage"));
}

#[test]
fn test_unmatched_pattern_fails_the_run() {
    let ws = TempDir::new().unwrap();

    nunit_runner()
        .args(["run", "--test-files", "**\\*.Tests"])
        .arg("--workspace")
        .arg(ws.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "no files matching the pattern **\\*.Tests",
        ));
}

#[test]
fn test_invalid_platform_is_rejected() {
    let ws = TempDir::new().unwrap();

    nunit_runner()
        .args(["run", "--dry-run", "--platform", "sparc"])
        .arg("--workspace")
        .arg(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown platform selector: sparc"));
}

#[test]
fn test_init_writes_config_once() {
    let ws = TempDir::new().unwrap();
    let cwd = ws.path().to_string_lossy().into_owned();

    nunit_runner()
        .args(["init", "--cwd", &cwd, "--nunit-home", "/opt/nunit/nunit3-console"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let written = fs::read_to_string(ws.path().join(".nunit-runner.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["test_files"], "**/*.Tests.dll");
    assert_eq!(json["installations"][0]["home"], "/opt/nunit/nunit3-console");

    nunit_runner()
        .args(["init", "--cwd", &cwd])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn test_platforms_lists_selectors() {
    nunit_runner()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("x64"))
        .stdout(predicate::str::contains("framework45"));
}

#[cfg(windows)]
#[test]
fn test_dry_run_working_directory_is_not_verbatim() {
    let ws = TempDir::new().unwrap();
    touch(ws.path(), "aaa/aaa.Tests.dll");

    nunit_runner()
        .args(["run", "--dry-run", "--test-files", "**\\*.Tests.dll"])
        .arg("--workspace")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Working directory: "))
        .stdout(predicate::str::contains("\\\\?\\").not());
}

#[cfg(unix)]
mod exit_codes {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn workspace_with_console(script: &str) -> (TempDir, TempDir) {
        let ws = TempDir::new().unwrap();
        let tools = TempDir::new().unwrap();
        let exe = tools.path().join("nunit-console");
        fs::write(&exe, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        let config = serde_json::json!({
            "installations": [{ "name": "Default", "home": exe.to_string_lossy() }]
        });
        fs::write(ws.path().join(".nunit-runner.json"), config.to_string()).unwrap();
        (ws, tools)
    }

    #[test]
    fn test_nonzero_exit_fails_with_child_code() {
        let (ws, _tools) = workspace_with_console("echo running; exit 2");

        nunit_runner()
            .args(["run", "--shell", "posix"])
            .arg("--workspace")
            .arg(ws.path())
            .assert()
            .code(2)
            .stdout(predicate::str::contains("running"))
            .stdout(predicate::str::contains("NUnit exited with 2"))
            .stdout(predicate::str::contains("Finished: FAILURE"));
    }

    #[test]
    fn test_nonzero_exit_is_unstable_without_fail_build() {
        let (ws, _tools) = workspace_with_console("exit 2");

        nunit_runner()
            .args(["run", "--shell", "posix", "--no-fail-build"])
            .arg("--workspace")
            .arg(ws.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Finished: UNSTABLE"));
    }

    #[test]
    fn test_coverage_env_is_printed() {
        let (ws, _tools) =
            workspace_with_console("echo Attachments:; echo '  TestResults/run.coverage'");

        nunit_runner()
            .args(["run", "--shell", "posix"])
            .arg("--workspace")
            .arg(ws.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "NUNIT_RESULT_COVERAGE=TestResults/run.coverage",
            ));
    }
}

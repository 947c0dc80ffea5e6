// Contract tests for the `create-fast-vue3` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("create-fast-vue3").unwrap();
    cmd.current_dir(cwd)
        .env_remove("FAST_VUE3_TEMPLATE")
        .env_remove("npm_execpath")
        .env_remove("RUST_LOG");
    cmd
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(dir)
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

#[test]
fn test_help_lists_options() {
    let temp_dir = TempDir::new().unwrap();

    create_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("npm-execpath").not());
}

#[test]
fn test_declined_overwrite_exits_with_error_and_keeps_files() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("existing");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "precious").unwrap();

    create_cmd(temp_dir.path())
        .arg("existing")
        .write_stdin("n\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("is not empty. Remove existing files and continue?"))
        .stdout(predicate::str::contains("Scaffolding project").not())
        .stderr(predicate::str::contains("Operation cancelled"));

    assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "precious");
    assert_eq!(fs::read_dir(&existing).unwrap().count(), 1);
}

#[test]
fn test_closed_input_cancels_at_project_name() {
    let temp_dir = TempDir::new().unwrap();

    create_cmd(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Project name:"))
        .stderr(predicate::str::contains("Operation cancelled"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_interrupt_at_project_name_cancels() {
    use std::io::Read;
    use std::process::Stdio;

    let temp_dir = TempDir::new().unwrap();
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("create-fast-vue3"))
        .current_dir(temp_dir.path())
        .env_remove("FAST_VUE3_TEMPLATE")
        .env_remove("npm_execpath")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Hold stdin open so the prompt waits instead of seeing end of input
    let stdin = child.stdin.take().unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let mut shown = Vec::new();
    let mut chunk = [0_u8; 256];
    while !String::from_utf8_lossy(&shown).contains("Project name:") {
        let read = stdout.read(&mut chunk).unwrap();
        assert!(read > 0, "binary exited before prompting");
        shown.extend_from_slice(&chunk[..read]);
    }

    let status = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    drop(stdin);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Operation cancelled"));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_force_skips_confirmation_and_fetch_failure_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("existing");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("stale.txt"), "stale").unwrap();
    let missing_template = temp_dir.path().join("no-such-template");

    create_cmd(temp_dir.path())
        .arg("existing")
        .arg("--force")
        .arg("--template")
        .arg(&missing_template)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Remove existing files").not())
        .stdout(predicate::str::contains("Done. Now run").not())
        .stderr(predicate::str::contains("git clone err"))
        .stderr(predicate::str::contains("Operation cancelled").not());

    assert!(!existing.join("stale.txt").exists());
}

#[test]
fn test_scaffold_from_local_template() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }

    let template_dir = TempDir::new().unwrap();
    fs::write(
        template_dir.path().join("package.json"),
        r#"{"name": "fast-vue3", "version": "3.1.4", "author": "MaleWeb", "scripts": {"dev": "vite"}}"#,
    )
    .unwrap();
    fs::write(template_dir.path().join("index.html"), "<div id=\"app\"></div>").unwrap();
    git(template_dir.path(), &["init", "--quiet"]);
    git(template_dir.path(), &["add", "."]);
    git(template_dir.path(), &["commit", "--quiet", "-m", "template"]);

    let work_dir = TempDir::new().unwrap();
    create_cmd(work_dir.path())
        .arg("my-app")
        .arg("--template")
        .arg(template_dir.path())
        .env("npm_execpath", "/usr/local/lib/node_modules/pnpm/bin/pnpm.cjs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffolding project in"))
        .stdout(predicate::str::contains("cd my-app"))
        .stdout(predicate::str::contains("pnpm install"))
        .stdout(predicate::str::contains("pnpm dev"));

    let root = work_dir.path().join("my-app");
    assert!(root.join("index.html").exists());
    assert!(!root.join(".git").exists());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["version"], "0.0.0");
    assert_eq!(manifest["scripts"]["dev"], "vite");
    assert!(manifest.get("author").is_none());
}

//! Shared test harness for git-cli integration tests.
//!
//! Runs the compiled `ugit` binary against a scratch working tree per test.
//! Unlike a real Git, `ugit` has no environment override and no author
//! identity to pin, so there is no environment-variable scaffolding here.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the `ugit` binary in `dir` with the given arguments.
pub fn ugit(dir: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(env!("CARGO_BIN_EXE_ugit"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run ugit");

    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// `init` a fresh repository at `dir` and assert it succeeded.
pub fn init(dir: &Path) {
    let result = ugit(dir, &["init"]);
    assert_eq!(result.exit_code, 0, "init failed: {}", result.stderr);
}

/// Write `content` to `dir/name`, creating parent directories as needed.
pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// `add` (if any paths are given) then `commit -m message`, returning the
/// new commit's oid. `commit` itself snapshots the live working tree rather
/// than the index, so an empty `paths` list is valid — e.g. finishing a
/// merge whose conflict resolution is already on disk.
pub fn commit_all(dir: &Path, paths: &[&str], message: &str) -> String {
    if !paths.is_empty() {
        let mut add_args = vec!["add"];
        add_args.extend_from_slice(paths);
        let result = ugit(dir, &add_args);
        assert_eq!(result.exit_code, 0, "add failed: {}", result.stderr);
    }

    let result = ugit(dir, &["commit", "-m", message]);
    assert_eq!(result.exit_code, 0, "commit failed: {}", result.stderr);
    result.stdout.trim().to_string()
}

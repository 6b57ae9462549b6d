//! End-to-end workflow tests driving the `ugit` binary directly, covering
//! the scenarios in the core spec: init/add/commit, detached-HEAD status,
//! fast-forward merge, three-way merge, fetch, and name resolution.

mod common;
use common::*;

#[test]
fn init_add_commit_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "hello\n");
    let oid = commit_all(dir.path(), &["a.txt"], "one");
    assert_eq!(oid.len(), 40);

    let show = ugit(dir.path(), &["show"]);
    assert_eq!(show.exit_code, 0);
    assert!(show.stdout.contains(&oid));
    assert!(show.stdout.contains("one"));

    let cat = ugit(dir.path(), &["cat-file", "-p", "@"]);
    assert!(cat.stdout.contains("tree"));
}

#[test]
fn detached_head_status_message() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "one\n");
    let first = commit_all(dir.path(), &["a.txt"], "one");

    write_file(dir.path(), "a.txt", "two\n");
    commit_all(dir.path(), &["a.txt"], "two");

    let checkout = ugit(dir.path(), &["checkout", &first]);
    assert_eq!(checkout.exit_code, 0);

    let status = ugit(dir.path(), &["status"]);
    assert!(
        status.stdout.contains(&format!("HEAD detached at {}", &first[..10])),
        "unexpected status output: {}",
        status.stdout
    );
}

#[test]
fn fast_forward_merge_clears_no_merge_head() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "base\n");
    commit_all(dir.path(), &["a.txt"], "base");

    assert_eq!(ugit(dir.path(), &["branch", "b1"]).exit_code, 0);
    assert_eq!(ugit(dir.path(), &["checkout", "b1"]).exit_code, 0);

    write_file(dir.path(), "a.txt", "on b1\n");
    commit_all(dir.path(), &["a.txt"], "on b1");

    assert_eq!(ugit(dir.path(), &["checkout", "master"]).exit_code, 0);
    let merge = ugit(dir.path(), &["merge", "b1"]);
    assert_eq!(merge.exit_code, 0);
    assert!(merge.stdout.contains("Fast-forward"));

    let status = ugit(dir.path(), &["status"]);
    assert!(!status.stdout.contains("Merging with"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "on b1\n"
    );
}

#[test]
fn three_way_merge_sets_merge_head_and_two_parents() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "shared.txt", "base\n");
    commit_all(dir.path(), &["shared.txt"], "A");

    assert_eq!(ugit(dir.path(), &["branch", "feature"]).exit_code, 0);

    write_file(dir.path(), "master_only.txt", "from master\n");
    let master_commit = commit_all(dir.path(), &["master_only.txt"], "M");

    assert_eq!(ugit(dir.path(), &["checkout", "feature"]).exit_code, 0);
    write_file(dir.path(), "feature_only.txt", "from feature\n");
    let feature_commit = commit_all(dir.path(), &["feature_only.txt"], "F");

    let merge = ugit(dir.path(), &["merge", "master"]);
    assert_eq!(merge.exit_code, 0);

    let status = ugit(dir.path(), &["status"]);
    assert!(
        status.stdout.contains(&format!("Merging with {}", master_commit)),
        "expected MERGE_HEAD to name master's commit: {}",
        status.stdout
    );

    let oid = commit_all(dir.path(), &[], "merge M into F");
    let show = ugit(dir.path(), &["show", &oid]);
    assert!(show.exit_code == 0);

    let cat = ugit(dir.path(), &["cat-file", "-p", &oid]);
    let parent_lines: Vec<&str> = cat
        .stdout
        .lines()
        .filter(|l| l.starts_with("parent "))
        .collect();
    assert_eq!(
        parent_lines,
        vec![
            format!("parent {}", feature_commit).as_str(),
            format!("parent {}", master_commit).as_str(),
        ]
    );

    let status_after = ugit(dir.path(), &["status"]);
    assert!(!status_after.stdout.contains("Merging with"));
}

#[test]
fn fetch_populates_remote_refs() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    init(remote.path());
    init(local.path());

    write_file(remote.path(), "a.txt", "hello\n");
    let remote_oid = commit_all(remote.path(), &["a.txt"], "initial");

    let remote_path = remote.path().to_string_lossy().to_string();
    let fetch = ugit(local.path(), &["fetch", &remote_path]);
    assert_eq!(fetch.exit_code, 0, "fetch failed: {}", fetch.stderr);

    let rev = ugit(local.path(), &["cat-file", "-t", "refs/remote/master"]);
    assert_eq!(rev.exit_code, 0);
    assert_eq!(rev.stdout.trim(), "commit");

    let cat = ugit(local.path(), &["cat-file", "-p", "refs/remote/master"]);
    assert!(cat.stdout.contains(&remote_oid));
}

#[test]
fn push_updates_remote_branch() {
    let remote = tempfile::tempdir().unwrap();
    let local = tempfile::tempdir().unwrap();
    init(remote.path());
    init(local.path());

    write_file(local.path(), "a.txt", "hello\n");
    commit_all(local.path(), &["a.txt"], "initial");

    let remote_path = remote.path().to_string_lossy().to_string();
    let push = ugit(local.path(), &["push", &remote_path, "refs/heads/master"]);
    assert_eq!(push.exit_code, 0, "push failed: {}", push.stderr);

    let log = ugit(remote.path(), &["log", "master"]);
    assert_eq!(log.exit_code, 0);
    assert!(log.stdout.contains("initial"));
}

#[test]
fn name_resolution_at_and_hex_and_unknown() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "content\n");
    let oid = commit_all(dir.path(), &["a.txt"], "one");

    let at_show = ugit(dir.path(), &["show", "@"]);
    let default_show = ugit(dir.path(), &["show"]);
    assert_eq!(at_show.stdout, default_show.stdout);

    let hex_show = ugit(dir.path(), &["show", &oid]);
    assert_eq!(hex_show.exit_code, 0);

    let unknown = ugit(dir.path(), &["show", "not-a-real-name"]);
    assert_ne!(unknown.exit_code, 0);
    assert!(!unknown.stderr.is_empty());
}

#[test]
fn diff_cached_shows_staged_changes() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "one\n");
    commit_all(dir.path(), &["a.txt"], "one");

    write_file(dir.path(), "a.txt", "two\n");
    let add = ugit(dir.path(), &["add", "a.txt"]);
    assert_eq!(add.exit_code, 0);

    let cached = ugit(dir.path(), &["diff", "--cached"]);
    assert_eq!(cached.exit_code, 0);
    assert!(cached.stdout.contains("a.txt"));
}

#[test]
fn add_accepts_multiple_files_in_one_call() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "a\n");
    write_file(dir.path(), "b.txt", "b\n");

    let add = ugit(dir.path(), &["add", "a.txt", "b.txt"]);
    assert_eq!(add.exit_code, 0, "add failed: {}", add.stderr);

    let cached = ugit(dir.path(), &["diff", "--cached"]);
    assert!(cached.stdout.contains("a.txt"));
    assert!(cached.stdout.contains("b.txt"));
}

#[test]
fn branch_listing_marks_current_branch() {
    let dir = tempfile::tempdir().unwrap();
    init(dir.path());

    write_file(dir.path(), "a.txt", "x\n");
    commit_all(dir.path(), &["a.txt"], "one");
    assert_eq!(ugit(dir.path(), &["branch", "other"]).exit_code, 0);

    let listing = ugit(dir.path(), &["branch"]);
    assert_eq!(listing.exit_code, 0);
    assert!(listing.stdout.contains("* master"));
    assert!(listing.stdout.contains("  other"));
}

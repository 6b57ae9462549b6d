use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Walk commit history from a starting point (default `@`), first-parent
/// history contiguous, other branches interleaved as the walker yields them.
#[derive(Args)]
pub struct LogArgs {
    /// Name to start from (ref, tag, branch, oid, or `@`)
    name: Option<String>,
}

pub fn run(args: &LogArgs) -> Result<i32> {
    let repo = open_repo()?;
    let start = repo.resolve_name(args.name.as_deref().unwrap_or("@"))?;

    for oid in git_revwalk::walk_commits(repo.odb(), [start])? {
        let commit = repo.read_commit(&oid)?;
        println!("commit {}", oid.to_hex());
        for parent in &commit.parents {
            println!("parent {}", parent.to_hex());
        }
        println!();
        for line in commit.message.split(|&b| b == b'\n') {
            println!("    {}", String::from_utf8_lossy(line));
        }
        println!();
    }
    Ok(0)
}

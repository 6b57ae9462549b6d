use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Show a commit's message and its diff against its first parent (or the
/// full tree, for a root commit).
#[derive(Args)]
pub struct ShowArgs {
    /// Name to show (default `@`)
    name: Option<String>,
}

pub fn run(args: &ShowArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(args.name.as_deref().unwrap_or("@"))?;
    let commit = repo.read_commit(&oid)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "commit {}", oid.to_hex())?;
    writeln!(out)?;
    for line in commit.message.split(|&b| b == b'\n') {
        writeln!(out, "    {}", String::from_utf8_lossy(line))?;
    }
    writeln!(out)?;

    let to_tree = repo.flatten(&commit.tree)?;
    let from_tree = match commit.parents.first() {
        Some(parent) => repo.flatten(&repo.read_commit(parent)?.tree)?,
        None => Default::default(),
    };

    let patch = git_diff::diff_trees(&repo, &from_tree, &to_tree)?;
    out.write_all(&patch)?;
    Ok(0)
}

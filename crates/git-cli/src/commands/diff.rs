use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Compare a commit's tree (default `@`) against the live working tree, or
/// against the staged index with `--cached`.
#[derive(Args)]
pub struct DiffArgs {
    /// Diff the staged index instead of the working tree
    #[arg(long)]
    cached: bool,

    /// Name to diff against (default `@`)
    name: Option<String>,
}

pub fn run(args: &DiffArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(args.name.as_deref().unwrap_or("@"))?;
    let commit = repo.read_commit(&oid)?;
    let from_tree = repo.flatten(&commit.tree)?;

    let to_tree: BTreeMap<String, git_hash::ObjectId> = if args.cached {
        repo.with_index(|index| Ok(index.iter().map(|(p, oid)| (p.to_string(), oid)).collect()))?
    } else {
        let working_oid = repo.write_tree(repo.worktree())?;
        repo.flatten(&working_oid)?
    };

    let patch = git_diff::diff_trees(&repo, &from_tree, &to_tree)?;
    io::stdout().write_all(&patch)?;
    Ok(0)
}

use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Empty the working tree and restore it from a stored tree object.
#[derive(Args)]
pub struct ReadTreeArgs {
    /// Tree (or commit) to restore
    tree: String,
}

pub fn run(args: &ReadTreeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(&args.tree)?;

    let tree_oid = match repo.odb().read(&oid)? {
        git_object::Object::Tree(_) => oid,
        git_object::Object::Commit(commit) => commit.tree,
        other => anyhow::bail!("{} is a {}, not a tree or commit", oid, other.object_type()),
    };

    repo.restore(&tree_oid)?;
    Ok(0)
}

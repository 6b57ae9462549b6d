use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Print the merge base of two commits.
#[derive(Args)]
pub struct MergeBaseArgs {
    first: String,
    second: String,
}

pub fn run(args: &MergeBaseArgs) -> Result<i32> {
    let repo = open_repo()?;
    let a = repo.resolve_name(&args.first)?;
    let b = repo.resolve_name(&args.second)?;

    match git_merge::merge_base(&repo, a, b)? {
        Some(oid) => println!("{}", oid.to_hex()),
        None => anyhow::bail!("no common ancestor"),
    }
    Ok(0)
}

use anyhow::Result;
use clap::Args;
use git_merge::MergeOutcome;

use super::open_repo;

/// Merge a commit into `HEAD`: fast-forward when possible, otherwise a
/// three-way merge that leaves `MERGE_HEAD` set for the next commit.
#[derive(Args)]
pub struct MergeArgs {
    /// Commit to merge into HEAD
    name: String,
}

pub fn run(args: &MergeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let other = repo.resolve_name(&args.name)?;

    match git_merge::merge(&repo, other)? {
        MergeOutcome::FastForward => println!("Fast-forward"),
        MergeOutcome::ThreeWay => {
            println!("Merging, conflicts marked in the working tree. Commit to finish.")
        }
    }
    Ok(0)
}

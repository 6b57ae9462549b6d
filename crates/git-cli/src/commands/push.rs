use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Push a local ref's object closure to a remote working tree and update
/// its ref to match.
#[derive(Args)]
pub struct PushArgs {
    /// Path to the remote working tree
    remote: String,

    /// Ref to push, e.g. refs/heads/master
    refname: String,
}

pub fn run(args: &PushArgs) -> Result<i32> {
    let repo = open_repo()?;
    repo.push(args.remote.clone(), &args.refname)?;
    Ok(0)
}

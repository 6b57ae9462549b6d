use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Pull every branch of a remote working tree into `refs/remote/`, copying
/// in whatever objects the local store is missing.
#[derive(Args)]
pub struct FetchArgs {
    /// Path to the remote working tree
    remote: String,
}

pub fn run(args: &FetchArgs) -> Result<i32> {
    let repo = open_repo()?;
    repo.fetch(args.remote.clone())?;
    Ok(0)
}

use anyhow::Result;
use clap::Args;
use git_ref::{RefName, RefValue};

use super::open_repo;

/// Move `HEAD` (or the branch it points at) straight to a commit, without
/// touching the working tree.
#[derive(Args)]
pub struct ResetArgs {
    /// Commit to reset to
    name: String,
}

pub fn run(args: &ResetArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(&args.name)?;
    let head = RefName::new("HEAD")?;
    repo.refs().update(&head, &RefValue::direct(oid), true)?;
    Ok(0)
}

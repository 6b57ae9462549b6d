use anyhow::Result;
use clap::Args;
use git_ref::{RefName, RefValue};

use super::open_repo;

/// Restore a commit's tree into the working directory and move `HEAD`.
///
/// If `name` names a branch, `HEAD` becomes symbolic to that branch (so a
/// following commit advances it); otherwise `HEAD` is overwritten directly
/// with the resolved oid, leaving the repository in detached-HEAD state.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Branch, tag, or oid to check out
    name: String,
}

pub fn run(args: &CheckoutArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(&args.name)?;
    let commit = repo.read_commit(&oid)?;
    repo.restore(&commit.tree)?;

    let head = RefName::new("HEAD")?;
    let branch_name = RefName::new(format!("refs/heads/{}", args.name)).ok();
    let on_branch = match &branch_name {
        Some(name) => !repo.refs().get(name, false)?.is_absent(),
        None => false,
    };

    match branch_name {
        Some(name) if on_branch => {
            repo.refs().update(&head, &RefValue::symbolic(name), false)?;
        }
        _ => {
            repo.refs().update(&head, &RefValue::direct(oid), false)?;
        }
    }

    Ok(0)
}

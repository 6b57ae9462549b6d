use anyhow::Result;
use clap::Args;
use git_ref::{RefName, RefValue};

use super::open_repo;

/// Create a branch pointing at a commit (default `@`), or list existing
/// branches (marking the checked-out one) when no name is given.
#[derive(Args)]
pub struct BranchArgs {
    /// Branch name to create
    name: Option<String>,

    /// Object the branch points at (default `@`)
    #[arg(default_value = "@")]
    start_point: String,
}

pub fn run(args: &BranchArgs) -> Result<i32> {
    let repo = open_repo()?;

    let Some(name) = &args.name else {
        let head = RefName::new("HEAD")?;
        let current = repo.refs().get(&head, false)?;
        let current_branch = match &current.target {
            Some(git_ref::RefTarget::Name(n)) if n.is_branch() => Some(n.clone()),
            _ => None,
        };

        for (ref_name, _) in repo.refs().iter("refs/heads/")? {
            let marker = if Some(&ref_name) == current_branch.as_ref() {
                "*"
            } else {
                " "
            };
            println!("{marker} {}", ref_name.short_name());
        }
        return Ok(0);
    };

    let oid = repo.resolve_name(&args.start_point)?;
    let ref_name = RefName::new(format!("refs/heads/{name}"))?;
    repo.refs().update(&ref_name, &RefValue::direct(oid), true)?;
    Ok(0)
}

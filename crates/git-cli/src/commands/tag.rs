use anyhow::Result;
use clap::Args;
use git_ref::{RefName, RefValue};

use super::open_repo;

/// Create a tag pointing at a commit (default `@`).
#[derive(Args)]
pub struct TagArgs {
    /// Tag name to create
    name: String,

    /// Object the tag points at (default `@`)
    #[arg(default_value = "@")]
    oid: String,
}

pub fn run(args: &TagArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(&args.oid)?;
    let ref_name = RefName::new(format!("refs/tags/{}", args.name))?;
    repo.refs().update(&ref_name, &RefValue::direct(oid), true)?;
    Ok(0)
}

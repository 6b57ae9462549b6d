use anyhow::Result;
use clap::Args;
use git_object::ObjectType;

use super::open_repo;

/// Hash a file's content and store it as a blob, printing the resulting oid.
#[derive(Args)]
pub struct HashObjectArgs {
    /// File to hash
    file: String,
}

pub fn run(args: &HashObjectArgs) -> Result<i32> {
    let repo = open_repo()?;
    let data = std::fs::read(&args.file)?;
    let oid = repo.odb().put(&data, ObjectType::Blob)?;
    println!("{}", oid.to_hex());
    Ok(0)
}

use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Snapshot the working tree and record it as a new commit on `HEAD`.
#[derive(Args)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short = 'm', long = "message")]
    message: String,
}

pub fn run(args: &CommitArgs) -> Result<i32> {
    let repo = open_repo()?;
    let mut message = args.message.clone();
    if !message.ends_with('\n') {
        message.push('\n');
    }
    let oid = repo.commit(message)?;
    println!("{}", oid.to_hex());
    Ok(0)
}

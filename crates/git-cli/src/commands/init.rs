use anyhow::Result;
use clap::Args;
use git_repository::Repository;

/// Initialize a repository in the current directory. Safe to re-run: an
/// existing `HEAD` is left untouched.
#[derive(Args)]
pub struct InitArgs;

pub fn run(_args: &InitArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let repo = Repository::init(&cwd)?;
    println!(
        "Initialized empty ugit repository in {}",
        repo.repo_dir().display()
    );
    Ok(0)
}

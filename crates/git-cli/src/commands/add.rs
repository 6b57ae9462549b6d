use std::path::Path;

use anyhow::Result;
use clap::Args;
use git_object::ObjectType;

use super::open_repo;

/// Stage one or more files into the index: hash their content as blobs and
/// record the path→oid mappings. Note that `commit` snapshots the live
/// working tree directly rather than reading this index back.
#[derive(Args)]
pub struct AddArgs {
    /// Files to stage, relative to the working tree root
    #[arg(required = true)]
    paths: Vec<String>,
}

pub fn run(args: &AddArgs) -> Result<i32> {
    let repo = open_repo()?;

    repo.with_index(|index| {
        for path in &args.paths {
            let full = repo.worktree().join(path);
            let data = std::fs::read(&full)?;
            let oid = repo.odb().put(&data, ObjectType::Blob)?;

            let rel = Path::new(path)
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            index.insert(rel, oid);
        }
        Ok(())
    })?;
    Ok(0)
}

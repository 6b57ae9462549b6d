use anyhow::Result;
use clap::Args;
use git_diff::ChangeKind;
use git_ref::RefName;

use super::open_repo;

/// Report the current `HEAD` (branch name, or detached oid), whether a
/// merge is in progress, and every path that differs from the working
/// tree.
#[derive(Args)]
pub struct StatusArgs;

pub fn run(_args: &StatusArgs) -> Result<i32> {
    let repo = open_repo()?;

    let head = RefName::new("HEAD")?;
    let raw_head = repo.refs().get(&head, false)?;
    match &raw_head.target {
        Some(git_ref::RefTarget::Name(branch)) if branch.is_branch() => {
            println!("On branch {}", branch.short_name());
        }
        _ => {
            if let Some(oid) = repo.head_oid()? {
                println!("HEAD detached at {}", &oid.to_hex()[..10]);
            } else {
                println!("No commits yet");
            }
        }
    }

    let merge_head = RefName::new("MERGE_HEAD")?;
    if let Some(oid) = repo.refs().get_oid(&merge_head, true)? {
        println!("Merging with {}", oid.to_hex());
    }

    if let Some(head_oid) = repo.head_oid()? {
        let commit = repo.read_commit(&head_oid)?;
        let from_tree = repo.flatten(&commit.tree)?;
        let working_oid = repo.write_tree(repo.worktree())?;
        let to_tree = repo.flatten(&working_oid)?;

        let mut changes = git_diff::iter_changed_files(&from_tree, &to_tree);
        changes.sort_by(|a, b| a.0.cmp(&b.0));
        for (path, kind) in changes {
            let label = match kind {
                ChangeKind::New => "new file:  ",
                ChangeKind::Deleted => "deleted:   ",
                ChangeKind::Modified => "modified:  ",
            };
            println!("        {label}{path}");
        }
    }

    Ok(0)
}

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use git_object::Object;

use super::open_repo;

/// Inspect a stored object: its type, its payload size, or its content.
#[derive(Args)]
pub struct CatFileArgs {
    /// Print the object's type
    #[arg(short = 't', conflicts_with_all = ["size", "pretty"])]
    type_only: bool,

    /// Print the object's payload size in bytes
    #[arg(short = 's', conflicts_with_all = ["type_only", "pretty"])]
    size: bool,

    /// Pretty-print the object's content (the default)
    #[arg(short = 'p', conflicts_with_all = ["type_only", "size"])]
    pretty: bool,

    /// Object to inspect: a name, branch, tag, or oid
    object: String,
}

pub fn run(args: &CatFileArgs) -> Result<i32> {
    let repo = open_repo()?;
    let oid = repo.resolve_name(&args.object)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.type_only {
        let obj = repo.odb().read(&oid)?;
        writeln!(out, "{}", obj.object_type())?;
        return Ok(0);
    }

    if args.size {
        let payload = repo.odb().get(&oid, None)?;
        writeln!(out, "{}", payload.len())?;
        return Ok(0);
    }

    match repo.odb().read(&oid)? {
        Object::Blob(blob) => out.write_all(&blob.data)?,
        Object::Tree(tree) => {
            for entry in tree.iter() {
                writeln!(
                    out,
                    "{} {} {}",
                    if entry.is_tree() { "tree" } else { "blob" },
                    entry.oid.to_hex(),
                    entry.name
                )?;
            }
        }
        Object::Commit(commit) => {
            writeln!(out, "tree {}", commit.tree.to_hex())?;
            for parent in &commit.parents {
                writeln!(out, "parent {}", parent.to_hex())?;
            }
            writeln!(out)?;
            out.write_all(&commit.message)?;
        }
    }
    Ok(0)
}

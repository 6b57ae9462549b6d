use anyhow::Result;
use clap::Args;

use super::open_repo;

/// Emit the commit graph and every ref pointing into it as Graphviz DOT,
/// for piping into an external `dot` renderer.
#[derive(Args)]
pub struct GraphArgs;

pub fn run(_args: &GraphArgs) -> Result<i32> {
    let repo = open_repo()?;

    let refs = repo.refs().iter("")?;
    let seeds = refs.iter().filter_map(|(_, v)| v.oid());

    println!("digraph commits {{");
    for (name, value) in &refs {
        if let Some(oid) = value.oid() {
            let short = &oid.to_hex()[..8];
            println!("  \"{name}\" [shape=note]");
            println!("  \"{name}\" -> \"{short}\"");
        }
    }

    for oid in git_revwalk::walk_commits(repo.odb(), seeds)? {
        let commit = repo.read_commit(&oid)?;
        let short = &oid.to_hex()[..8];
        println!("  \"{short}\" [shape=box]");
        for parent in &commit.parents {
            let parent_short = &parent.to_hex()[..8];
            println!("  \"{short}\" -> \"{parent_short}\"");
        }
    }
    println!("}}");

    Ok(0)
}

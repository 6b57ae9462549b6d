mod add;
mod branch;
mod cat_file;
mod checkout;
mod commit;
mod diff;
mod fetch;
mod graph;
mod hash_object;
mod init;
mod log;
mod merge;
mod merge_base;
mod push;
mod read_tree;
mod reset;
mod show;
mod status;
mod tag;
mod write_tree;

use anyhow::Result;
use clap::Subcommand;
use git_repository::Repository;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    Init(init::InitArgs),
    HashObject(hash_object::HashObjectArgs),
    CatFile(cat_file::CatFileArgs),
    WriteTree(write_tree::WriteTreeArgs),
    ReadTree(read_tree::ReadTreeArgs),
    Commit(commit::CommitArgs),
    Log(log::LogArgs),
    Show(show::ShowArgs),
    Diff(diff::DiffArgs),
    Checkout(checkout::CheckoutArgs),
    Tag(tag::TagArgs),
    Branch(branch::BranchArgs),
    Status(status::StatusArgs),
    Reset(reset::ResetArgs),
    Merge(merge::MergeArgs),
    MergeBase(merge_base::MergeBaseArgs),
    Fetch(fetch::FetchArgs),
    Push(push::PushArgs),
    Add(add::AddArgs),
    /// Print the commit graph as Graphviz DOT (aliased `k`, after the
    /// original tutorial's graph-viewer command)
    #[command(name = "k")]
    Graph(graph::GraphArgs),
}

/// Open the repository rooted at the current working directory.
pub fn open_repo() -> Result<Repository> {
    Ok(Repository::discover()?)
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Init(args) => init::run(args),
        Commands::HashObject(args) => hash_object::run(args),
        Commands::CatFile(args) => cat_file::run(args),
        Commands::WriteTree(args) => write_tree::run(args),
        Commands::ReadTree(args) => read_tree::run(args),
        Commands::Commit(args) => commit::run(args),
        Commands::Log(args) => log::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Diff(args) => diff::run(args),
        Commands::Checkout(args) => checkout::run(args),
        Commands::Tag(args) => tag::run(args),
        Commands::Branch(args) => branch::run(args),
        Commands::Status(args) => status::run(args),
        Commands::Reset(args) => reset::run(args),
        Commands::Merge(args) => merge::run(args),
        Commands::MergeBase(args) => merge_base::run(args),
        Commands::Fetch(args) => fetch::run(args),
        Commands::Push(args) => push::run(args),
        Commands::Add(args) => add::run(args),
        Commands::Graph(args) => graph::run(args),
    }
}

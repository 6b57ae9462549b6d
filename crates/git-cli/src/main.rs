mod commands;

use std::process;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// `ugit` — a from-scratch content-addressed version control system.
///
/// The active repository is always `./.ugit` of the current working
/// directory; there is no `-C`/`--git-dir` override and no environment
/// variable that relocates it.
#[derive(Parser)]
#[command(name = "ugit", about = "A minimal, from-scratch content-addressed version control system")]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

fn main() {
    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(128);
        }
    }
}

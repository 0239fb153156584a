// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::options::AppOptions;
use crate::error::Result;
use crate::render::{summary, NO_MATCH};
use crate::resolve::ActionIndex;
use crate::store;

#[derive(Parser, Debug)]
#[command(name = "iam-lookup", version, about = "Look up IAM actions in a local service authorization snapshot")]
pub struct Cli {
    /// Project directory holding rawData.json (default: ~/.iampolicyhelper)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show where the snapshot lives and whether it is current
    Status,
    /// Resolve a (partial) `prefix:action` and print what is known about it
    Lookup {
        /// Free text, e.g. `s3:putobj`; several words are joined with spaces
        query: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut opts = AppOptions::from_env();
    if let Some(dir) = cli.dir.clone() {
        opts = opts.with_project_dir(dir);
    }
    crate::log::init(&opts)?;

    match cli.command {
        Command::Status => status(&opts),
        Command::Lookup { query } => lookup(&opts, &query.join(" ")),
    }
}

fn status(opts: &AppOptions) -> Result<()> {
    let dir = &opts.project_dir;
    let path = store::snapshot_path(dir);
    println!("Snapshot: {}", path.display());
    println!("Version: {}", store::stored_version(dir)?.unwrap_or_else(|| s!("(none)")));

    if store::needs_refresh(dir)? {
        println!("Status: stale, re-crawl required");
    } else {
        let catalog = store::load_snapshot(&path)?;
        let index = ActionIndex::build(&catalog);
        println!("Status: current ({} services, {} actions)", catalog.len(), index.len());
    }
    Ok(())
}

fn lookup(opts: &AppOptions, query: &str) -> Result<()> {
    let dir = &opts.project_dir;
    if store::needs_refresh(dir)? {
        eprintln!("Warning: snapshot in {} is missing or outdated", dir.display());
    }

    let catalog = store::load_snapshot(&store::snapshot_path(dir))?;
    let index = ActionIndex::build(&catalog);

    match index.resolve(query) {
        Some(hit) => println!("{}", summary(index.catalog(), &hit)),
        None => println!("{NO_MATCH}"),
    }
    Ok(())
}

//! transio — translation.io catalog sync CLI.
//!
//! # Usage
//!
//! ```text
//! transio init [--config <file>]
//! transio sync [--config <file>] [--purge] [--no-hooks]
//! ```
//!
//! `sync` is the composite pipeline step: it runs the configured extraction
//! hook, uploads the source catalog (purging unused keys with `--purge`),
//! writes back the returned per-locale catalogs, then runs the compile hook.

mod commands;
mod hooks;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{init::InitArgs, sync::SyncArgs};

#[derive(Parser, Debug)]
#[command(
    name = "transio",
    version,
    about = "Synchronize gettext catalogs with translation.io",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the remote project, seeded with any local catalogs.
    Init(InitArgs),

    /// Upload the source catalog and write back per-locale translations.
    Sync(SyncArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Sync(args) => args.run(),
    }
}

//! `transio sync` — composite sync pipeline step.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use transio_core::{config, SyncMode, YamlSource};
use transio_sync::{pipeline, HttpsTransport, SyncOutcome};

use crate::hooks;

/// Arguments for `transio sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the build-pipeline configuration file.
    #[arg(long, default_value = "translation.yaml")]
    pub config: PathBuf,

    /// Also mark keys absent from the uploaded catalog for removal.
    #[arg(long)]
    pub purge: bool,

    /// Skip the configured extract/compile hook commands.
    #[arg(long)]
    pub no_hooks: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let source = YamlSource::load(&self.config)?;
        let config = config::resolve(&source)?;

        if !self.no_hooks {
            hooks::run_if_configured("extract", config.extract_command.as_deref())?;
        }

        let mode = if self.purge {
            SyncMode::SyncAndPurge
        } else {
            SyncMode::Sync
        };
        let transport = HttpsTransport::new();
        let outcome = pipeline::run(&transport, &config, mode).context("sync failed")?;

        if !self.no_hooks {
            hooks::run_if_configured("compile", config.compile_command.as_deref())?;
        }

        print_outcome(&outcome);
        Ok(())
    }
}

fn print_outcome(outcome: &SyncOutcome) {
    if outcome.catalogs.is_empty() {
        println!("{} synced — the service returned no catalogs", "✓".green());
        return;
    }

    println!("{} synced {} catalog(s)", "✓".green(), outcome.catalogs.len());
    for catalog in &outcome.catalogs {
        println!("  ✎  {}  {}", catalog.locale, catalog.path.display());
    }
}

//! `transio init` — create the remote translation project.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use transio_core::{config, YamlSource};
use transio_sync::{pipeline, HttpsTransport};

/// Arguments for `transio init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to the build-pipeline configuration file.
    #[arg(long, default_value = "translation.yaml")]
    pub config: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let source = YamlSource::load(&self.config)?;
        let config = config::resolve(&source)?;

        let transport = HttpsTransport::new();
        pipeline::init(&transport, &config).context("project initialization failed")?;

        println!(
            "{} initialized remote project ({} target locales, source '{}')",
            "✓".green(),
            config.target_locales.len(),
            config.source_locale
        );
        Ok(())
    }
}

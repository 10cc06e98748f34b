use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli;
use crate::cohesion::survey;
use crate::config::ModmapConfig;
use crate::inventory::json::JsonFileSource;
use crate::inventory::InventorySnapshot;
use crate::io::output::create_writer;

pub struct CohesionOptions {
    pub inventory: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_cohesion(options: CohesionOptions) -> Result<()> {
    let config =
        ModmapConfig::load(options.config.as_deref()).context("loading configuration")?;

    let source = JsonFileSource::open(&options.inventory)
        .with_context(|| format!("reading inventory {}", options.inventory.display()))?;
    let snapshot = InventorySnapshot::load(&source)?;

    let report = survey(&snapshot, &config.cohesion);

    let mut writer = create_writer(options.format.into(), options.output.as_deref())?;
    writer.write_survey(&report)
}

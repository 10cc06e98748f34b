use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli;
use crate::config::ModmapConfig;
use crate::inventory::json::JsonFileSource;
use crate::inventory::InventorySnapshot;
use crate::io::output::create_writer;
use crate::plan::build_plan;

pub struct PlanOptions {
    pub inventory: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub compat_phases: bool,
    pub config: Option<PathBuf>,
}

pub fn handle_plan(options: PlanOptions) -> Result<()> {
    let mut config =
        ModmapConfig::load(options.config.as_deref()).context("loading configuration")?;
    if options.compat_phases {
        config.planner.strict_bands = true;
    }

    let source = JsonFileSource::open(&options.inventory)
        .with_context(|| format!("reading inventory {}", options.inventory.display()))?;
    let snapshot = InventorySnapshot::load(&source)?;

    let mut plan = build_plan(&snapshot, &config);
    if let Some(top) = options.top {
        plan.candidates.truncate(top);
    }

    let mut writer = create_writer(options.format.into(), options.output.as_deref())?;
    writer.write_plan(&plan)
}

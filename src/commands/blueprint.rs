use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::blueprint::build_blueprint;
use crate::cli;
use crate::core::errors::Error;
use crate::inventory::json::JsonFileSource;
use crate::inventory::InventorySnapshot;
use crate::io::output::create_writer;

pub struct BlueprintOptions {
    pub inventory: PathBuf,
    pub module: String,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_blueprint(options: BlueprintOptions) -> Result<()> {
    let source = JsonFileSource::open(&options.inventory)
        .with_context(|| format!("reading inventory {}", options.inventory.display()))?;
    let snapshot = InventorySnapshot::load(&source)?;

    let module = snapshot
        .module(&options.module)
        .ok_or_else(|| Error::UnknownModule(options.module.clone()))?;
    let routes = snapshot
        .routes_by_module()
        .get(options.module.as_str())
        .cloned()
        .unwrap_or_default();

    let blueprint = build_blueprint(module, &routes);

    let mut writer = create_writer(options.format.into(), options.output.as_deref())?;
    writer.write_blueprint(&blueprint)
}

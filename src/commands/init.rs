use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# Modmap Configuration

[planner]
# Cap on phase 2 (high-impact conversions needing hot-reload setup)
phase2_capacity = 5
# Cap on phase 3 (medium-priority conversions)
phase3_capacity = 8
# Keep the legacy phase bands, leaving mid-priority test modules
# unscheduled instead of sweeping them into phase 4
strict_bands = false

[cohesion]
# Module that should own all joy routes
canonical_joy_module = "codex.joy"
# Module that should own all resonance routes
canonical_resonance_module = "codex.resonance"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(crate::config::DEFAULT_CONFIG_FILE);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modmap")]
#[command(about = "Module inventory analyzer and migration planner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the full conversion plan for an inventory snapshot
    Plan {
        /// Inventory snapshot (JSON with "modules" and "routes" arrays)
        inventory: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N candidates
        #[arg(long = "top")]
        top: Option<usize>,

        /// Keep the legacy phase bands, leaving mid-priority test modules
        /// unscheduled
        #[arg(long = "compat-phases")]
        compat_phases: bool,

        /// Configuration file
        #[arg(short, long, env = "MODMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Analyze route placement and module cohesion
    Cohesion {
        /// Inventory snapshot (JSON with "modules" and "routes" arrays)
        inventory: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, env = "MODMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Produce the conversion blueprint for a single module
    Blueprint {
        /// Inventory snapshot (JSON with "modules" and "routes" arrays)
        inventory: PathBuf,

        /// Module id to plan
        #[arg(short, long)]
        module: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

use anyhow::Result;
use clap::Parser;
use modmap::cli::{Cli, Commands};
use modmap::commands::{
    handle_blueprint, handle_cohesion, handle_plan, init_config, BlueprintOptions,
    CohesionOptions, PlanOptions,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            inventory,
            format,
            output,
            top,
            compat_phases,
            config,
        } => handle_plan(PlanOptions {
            inventory,
            format,
            output,
            top,
            compat_phases,
            config,
        }),
        Commands::Cohesion {
            inventory,
            format,
            output,
            config,
        } => handle_cohesion(CohesionOptions {
            inventory,
            format,
            output,
            config,
        }),
        Commands::Blueprint {
            inventory,
            module,
            format,
            output,
        } => handle_blueprint(BlueprintOptions {
            inventory,
            module,
            format,
            output,
        }),
        Commands::Init { force } => init_config(force),
    }
}

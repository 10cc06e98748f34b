//! CLI command implementations for modmap operations.
//!
//! Each submodule handles one subcommand: loading the inventory snapshot,
//! running the relevant analysis, and writing the report in the requested
//! format.
//!
//! Available commands:
//! - **plan**: Build the full spec-driven conversion plan
//! - **cohesion**: Analyze route placement and module cohesion
//! - **blueprint**: Produce the conversion blueprint for a single module
//! - **init**: Initialize a new modmap configuration file

pub mod blueprint;
pub mod cohesion;
pub mod init;
pub mod plan;

pub use blueprint::{handle_blueprint, BlueprintOptions};
pub use cohesion::{handle_cohesion, CohesionOptions};
pub use init::init_config;
pub use plan::{handle_plan, PlanOptions};

// Export modules for library usage
pub mod blueprint;
pub mod cli;
pub mod cohesion;
pub mod commands;
pub mod config;
pub mod core;
pub mod inventory;
pub mod io;
pub mod plan;
pub mod priority;

// Re-export commonly used types
pub use crate::core::{
    errors::{Error, Result, ResultExt},
    EffortLevel, ModuleRecord, RouteRecord, Topic,
};

pub use crate::inventory::{
    json::JsonFileSource, InventorySnapshot, InventorySource, RecordBatch, SystemOverview,
};

pub use crate::priority::{
    consolidation::{consolidation_suggestions, ConsolidationSuggestion},
    planner::{plan_phases, ConversionPhase, PhaseEntry, PlannerConfig},
    scorer::{conversion_candidates, score_module, ModuleScore},
    topic_classifier::classify_module,
    ConversionCandidate, ConversionStrategy,
};

pub use crate::cohesion::{
    analyze_module, cohesion_reports, survey, CohesionConfig, CohesionReport, CohesionSurvey,
};

pub use crate::blueprint::{build_blueprint, ConversionBlueprint};

pub use crate::plan::{build_plan, ConversionPlan};

pub use crate::config::ModmapConfig;

pub use crate::io::output::{create_writer, OutputWriter};

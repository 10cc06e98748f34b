//! Per-module conversion blueprints
//!
//! A blueprint is the worked plan for converting one module to the
//! spec-driven architecture: ordered steps with time estimates, validation
//! criteria, the module's score, and its routes awaiting conversion.

use crate::core::{EffortLevel, ModuleRecord, RouteRecord};
use crate::priority::scorer::score_module;
use crate::priority::ConversionStrategy;
use serde::{Deserialize, Serialize};

/// The one conversion style this planner produces
pub const CONVERSION_TYPE: &str = "hot-reload-to-spec-driven";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Completed,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Completed => "completed",
        }
    }
}

/// One step of the conversion procedure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStep {
    pub step: u32,
    pub name: String,
    pub description: String,
    pub status: StepStatus,
    pub estimated_time: String,
}

/// A route carried through conversion, all pending until executed elsewhere
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRoute {
    pub id: String,
    pub name: String,
    pub path: String,
    pub method: String,
    pub conversion_status: StepStatus,
}

/// Conversion plan for a single module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionBlueprint {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub spec_reference: String,
    pub conversion_type: String,
    pub module: ModuleRecord,
    pub priority: u32,
    pub reason: String,
    pub strategy: ConversionStrategy,
    pub effort: EffortLevel,
    pub hot_reload_ready: bool,
    pub routes: Vec<BlueprintRoute>,
    pub steps: Vec<ConversionStep>,
    pub validation_criteria: Vec<String>,
}

/// Spec atom id tracking a module: `codex.X` maps to `codex.spec.X`,
/// anything else gets a plain `spec.` prefix
pub fn spec_reference(module_id: &str) -> String {
    match module_id.strip_prefix("codex.") {
        Some(rest) => format!("codex.spec.{rest}"),
        None => format!("spec.{module_id}"),
    }
}

/// Effort band from route and feature counts
pub fn estimate_effort(route_count: usize, feature_count: usize) -> EffortLevel {
    if route_count > 10 || feature_count > 5 {
        EffortLevel::High
    } else if route_count > 5 || feature_count > 3 {
        EffortLevel::Medium
    } else {
        EffortLevel::Low
    }
}

fn step(
    number: u32,
    name: &str,
    description: &str,
    status: StepStatus,
    estimated_time: &str,
) -> ConversionStep {
    ConversionStep {
        step: number,
        name: name.to_string(),
        description: description.to_string(),
        status,
        estimated_time: estimated_time.to_string(),
    }
}

fn conversion_steps(module: &ModuleRecord) -> Vec<ConversionStep> {
    let reload_done = module.is_hot_reloadable;
    vec![
        step(
            1,
            "Create Spec Atoms",
            "Extract current module structure and create spec atoms",
            StepStatus::Pending,
            "30 minutes",
        ),
        step(
            2,
            "Mark as Not Spec-Driven",
            "Add metadata to mark module as not yet spec-driven",
            StepStatus::Pending,
            "15 minutes",
        ),
        step(
            3,
            "Setup Hot-Reload",
            "Configure module for hot-reload if not already done",
            if reload_done {
                StepStatus::Completed
            } else {
                StepStatus::Pending
            },
            if reload_done { "0 minutes" } else { "1 hour" },
        ),
        step(
            4,
            "Generate Spec-Driven Code",
            "Generate new spec-driven implementation",
            StepStatus::Pending,
            "2-4 hours",
        ),
        step(
            5,
            "Test and Validate",
            "Test the converted module and validate functionality",
            StepStatus::Pending,
            "1-2 hours",
        ),
        step(
            6,
            "Deploy and Monitor",
            "Deploy converted module and monitor performance",
            StepStatus::Pending,
            "30 minutes",
        ),
    ]
}

fn validation_criteria(module: &ModuleRecord) -> Vec<String> {
    let mut criteria: Vec<String> = [
        "All existing routes must be preserved",
        "Module functionality must remain unchanged",
        "Performance must be maintained or improved",
        "Hot-reload capability must be working",
        "Spec atoms must be properly stored and retrievable",
        "Module must be marked as spec-driven in metadata",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if module.has_feature("AI") {
        criteria.push("AI functionality must be preserved and enhanced".to_string());
    }
    if module.has_feature("Resonance") {
        criteria.push("Resonance calculations must be accurate".to_string());
    }
    if module.has_feature("Real-time") {
        criteria.push("Real-time performance must be maintained".to_string());
    }
    criteria
}

/// Build the conversion blueprint for one module and its routes
pub fn build_blueprint(module: &ModuleRecord, routes: &[&RouteRecord]) -> ConversionBlueprint {
    let score = score_module(module, routes.len());
    ConversionBlueprint {
        id: format!("{}.conversion", module.id),
        name: format!("{} - Spec-Driven Conversion", module.name),
        version: "1.0.0".to_string(),
        description: format!("Spec-driven conversion plan for {}", module.name),
        spec_reference: spec_reference(&module.id),
        conversion_type: CONVERSION_TYPE.to_string(),
        module: module.clone(),
        priority: score.priority,
        reason: score.reason,
        strategy: score.strategy,
        effort: estimate_effort(routes.len(), module.features.len()),
        hot_reload_ready: module.is_hot_reloadable,
        routes: routes
            .iter()
            .map(|route| BlueprintRoute {
                id: route.id.clone(),
                name: route.name.clone(),
                path: route.path.clone(),
                method: route.method.clone(),
                conversion_status: StepStatus::Pending,
            })
            .collect(),
        steps: conversion_steps(module),
        validation_criteria: validation_criteria(module),
    }
}

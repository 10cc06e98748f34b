//! Whole-system conversion plan assembly
//!
//! Pulls the scored candidates, phase schedule, strategy groups,
//! consolidation suggestions, cohesion reports, and recommendations into a
//! single serializable report. Everything except the timestamp is a pure
//! function of the snapshot and config.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cohesion::{cohesion_reports, CohesionReport};
use crate::config::ModmapConfig;
use crate::inventory::{InventorySnapshot, SystemOverview};
use crate::priority::consolidation::{consolidation_suggestions, ConsolidationSuggestion};
use crate::priority::planner::{plan_phases, ConversionPhase};
use crate::priority::scorer::conversion_candidates;
use crate::priority::{ConversionCandidate, ConversionStrategy};

/// Top-level migration plan report
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPlan {
    pub generated_at: DateTime<Utc>,
    pub overview: SystemOverview,
    pub total_candidates: usize,
    pub candidates: Vector<ConversionCandidate>,
    pub phases: Vector<ConversionPhase>,
    pub strategy_groups: BTreeMap<ConversionStrategy, Vec<ConversionCandidate>>,
    pub consolidation: Vec<ConsolidationSuggestion>,
    pub cohesion: Vec<CohesionReport>,
    pub recommendations: Vec<String>,
}

fn group_by_strategy(
    candidates: &Vector<ConversionCandidate>,
) -> BTreeMap<ConversionStrategy, Vec<ConversionCandidate>> {
    let mut groups: BTreeMap<ConversionStrategy, Vec<ConversionCandidate>> = BTreeMap::new();
    for candidate in candidates {
        groups
            .entry(candidate.strategy)
            .or_default()
            .push(candidate.clone());
    }
    groups
}

fn recommendations(
    overview: &SystemOverview,
    candidates: &Vector<ConversionCandidate>,
) -> Vec<String> {
    let hot_reloadable = candidates.iter().filter(|c| c.is_hot_reloadable).count();
    let high_priority = candidates.iter().filter(|c| c.priority >= 15).count();

    let mut recommendations = vec![
        format!(
            "Current system has {} modules, {} already hot-reloadable",
            overview.total_modules, hot_reloadable
        ),
        format!("{high_priority} modules identified as high-priority for conversion"),
    ];

    let ai_modules = candidates
        .iter()
        .filter(|c| c.features.iter().any(|f| f == "AI"))
        .count();
    if ai_modules > 0 {
        recommendations.push(format!(
            "Focus on {ai_modules} AI modules for enhanced spec-driven capabilities"
        ));
    }

    let resonance_modules = candidates
        .iter()
        .filter(|c| c.features.iter().any(|f| f == "Resonance"))
        .count();
    if resonance_modules > 0 {
        recommendations.push(format!(
            "Prioritize {resonance_modules} Resonance modules for U-CORE integration"
        ));
    }

    if hot_reloadable > 0 {
        recommendations.push("Start with hot-reloadable modules for quick wins".to_string());
    }
    if high_priority > 5 {
        recommendations.push("Consider parallel conversion of high-priority modules".to_string());
    }

    recommendations
        .push("Implement spec-driven metadata tracking for all converted modules".to_string());
    recommendations.push("Create automated testing for spec-driven module validation".to_string());
    recommendations
}

/// Build the full conversion plan for a snapshot
pub fn build_plan(snapshot: &InventorySnapshot, config: &ModmapConfig) -> ConversionPlan {
    let overview = snapshot.overview();
    let candidates = conversion_candidates(snapshot);
    let phases = plan_phases(&candidates, &config.planner);
    let strategy_groups = group_by_strategy(&candidates);
    let consolidation = consolidation_suggestions(snapshot);
    let cohesion = cohesion_reports(snapshot, &config.cohesion);
    let recommendations = recommendations(&overview, &candidates);

    ConversionPlan {
        generated_at: Utc::now(),
        total_candidates: candidates.len(),
        overview,
        candidates,
        phases,
        strategy_groups,
        consolidation,
        cohesion,
        recommendations,
    }
}

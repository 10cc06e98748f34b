//! Route cohesion analysis
//!
//! Detects modules whose routes mix unrelated concerns and functionality
//! scattered away from its canonical home, and scores each module's
//! cohesion on a 0-10 scale.

pub mod placement;

pub use placement::{
    analyze_route, inappropriate_names, placement_report, routes_to_move, RoutePlacement,
};

use crate::core::errors::{Error, Result};
use crate::core::RouteRecord;
use crate::inventory::InventorySnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Functional concern signaled by a route's path or name
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteConcern {
    Ai,
    Translation,
    Concept,
    Joy,
    Resonance,
    Storage,
}

impl RouteConcern {
    /// Declaration order doubles as match precedence and report ordering
    pub const ALL: [RouteConcern; 6] = [
        RouteConcern::Ai,
        RouteConcern::Translation,
        RouteConcern::Concept,
        RouteConcern::Joy,
        RouteConcern::Resonance,
        RouteConcern::Storage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteConcern::Ai => "ai",
            RouteConcern::Translation => "translation",
            RouteConcern::Concept => "concept",
            RouteConcern::Joy => "joy",
            RouteConcern::Resonance => "resonance",
            RouteConcern::Storage => "storage",
        }
    }

    fn path_prefix(&self) -> &'static str {
        match self {
            RouteConcern::Ai => "/ai/",
            RouteConcern::Translation => "/translation/",
            RouteConcern::Concept => "/concept/",
            RouteConcern::Joy => "/joy/",
            RouteConcern::Resonance => "/resonance/",
            RouteConcern::Storage => "/storage/",
        }
    }

    fn name_keyword(&self) -> &'static str {
        match self {
            RouteConcern::Ai => "ai",
            RouteConcern::Translation => "translate",
            RouteConcern::Concept => "concept",
            RouteConcern::Joy => "joy",
            RouteConcern::Resonance => "resonance",
            RouteConcern::Storage => "storage",
        }
    }
}

impl fmt::Display for RouteConcern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// First concern whose path prefix matches the route or whose keyword occurs
/// in the route name, in declaration order
pub fn route_concern(route: &RouteRecord) -> Option<RouteConcern> {
    let name = route.name.to_lowercase();
    RouteConcern::ALL
        .iter()
        .copied()
        .find(|concern| {
            route.path.starts_with(concern.path_prefix()) || name.contains(concern.name_keyword())
        })
}

/// Canonical home modules for scatter-prone functionality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohesionConfig {
    #[serde(default = "default_joy_module")]
    pub canonical_joy_module: String,

    #[serde(default = "default_resonance_module")]
    pub canonical_resonance_module: String,
}

fn default_joy_module() -> String {
    "codex.joy".to_string()
}

fn default_resonance_module() -> String {
    "codex.resonance".to_string()
}

impl Default for CohesionConfig {
    fn default() -> Self {
        Self {
            canonical_joy_module: default_joy_module(),
            canonical_resonance_module: default_resonance_module(),
        }
    }
}

impl CohesionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.canonical_joy_module.is_empty() || self.canonical_resonance_module.is_empty() {
            return Err(Error::Configuration(
                "canonical module ids must be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-module cohesion findings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohesionReport {
    pub module_id: String,
    pub route_count: usize,
    pub concerns: Vec<RouteConcern>,
    pub issues: Vec<String>,
    pub suggested_consolidations: Vec<String>,
    pub cohesion_score: u32,
}

/// Analyze one module's routes for mixed concerns and scattering
pub fn analyze_module(
    module_id: &str,
    routes: &[&RouteRecord],
    config: &CohesionConfig,
) -> CohesionReport {
    // Collected in enum order so reports are deterministic
    let concerns: BTreeSet<RouteConcern> = routes.iter().filter_map(|r| route_concern(r)).collect();

    let mut issues = Vec::new();
    let mut suggested_consolidations = Vec::new();

    if concerns.len() > 2 {
        let list = concerns
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(format!("Module handles multiple concerns: {list}"));
    }

    if concerns.contains(&RouteConcern::Joy) && module_id != config.canonical_joy_module {
        issues.push("Joy functionality scattered across modules".to_string());
        suggested_consolidations.push(format!(
            "Consolidate joy routes into {} module",
            config.canonical_joy_module
        ));
    }

    if concerns.contains(&RouteConcern::Resonance) && module_id != config.canonical_resonance_module
    {
        issues.push("Resonance functionality scattered across modules".to_string());
        suggested_consolidations.push(format!(
            "Consolidate resonance routes into {} module",
            config.canonical_resonance_module
        ));
    }

    let cohesion_score = (10i32 - issues.len() as i32 - concerns.len() as i32).max(0) as u32;

    CohesionReport {
        module_id: module_id.to_string(),
        route_count: routes.len(),
        concerns: concerns.into_iter().collect(),
        issues,
        suggested_consolidations,
        cohesion_score,
    }
}

/// Cohesion report for every module, in module id order
///
/// Route-less modules get a clean report; routes owned by modules missing
/// from the inventory are grouped under `"unknown"`.
pub fn cohesion_reports(
    snapshot: &InventorySnapshot,
    config: &CohesionConfig,
) -> Vec<CohesionReport> {
    let grouped = snapshot.routes_by_module();
    let mut ids: BTreeSet<&str> = snapshot.modules.iter().map(|m| m.id.as_str()).collect();
    ids.extend(grouped.keys());
    ids.iter()
        .map(|id| {
            let routes = grouped.get(id).map(Vec::as_slice).unwrap_or(&[]);
            analyze_module(id, routes, config)
        })
        .collect()
}

/// Aggregate statistics over a placement survey
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub total_routes: usize,
    pub routes_to_move: usize,
    pub inappropriate_names: usize,
    pub total_issues: usize,
}

/// Full cohesion survey: per-module reports, per-route placements, totals
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohesionSurvey {
    pub reports: Vec<CohesionReport>,
    pub placements: Vec<RoutePlacement>,
    pub summary: SurveyStats,
}

pub fn survey(snapshot: &InventorySnapshot, config: &CohesionConfig) -> CohesionSurvey {
    let reports = cohesion_reports(snapshot, config);
    let placements = placement_report(snapshot, config);
    let summary = SurveyStats {
        total_routes: snapshot.routes.len(),
        routes_to_move: placements.iter().filter(|p| p.should_move).count(),
        inappropriate_names: placements.iter().filter(|p| !p.route_appropriate).count(),
        total_issues: placements.iter().map(|p| p.issues.len()).sum(),
    };
    CohesionSurvey {
        reports,
        placements,
        summary,
    }
}

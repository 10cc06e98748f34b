//! Per-route placement analysis
//!
//! Answers, for each route: does it live in the right module, and is its
//! path named appropriately for what it does. Relocation checks are ordered
//! and first-match-wins; naming checks are independent of relocation.

use super::CohesionConfig;
use crate::core::RouteRecord;
use crate::inventory::InventorySnapshot;
use serde::{Deserialize, Serialize};

/// Relocation and naming advice for a single route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlacement {
    pub route_id: String,
    pub path: String,
    pub method: String,
    pub name: String,
    pub current_module: String,
    /// Defaults to the current module when the route is well placed
    pub suggested_module: String,
    pub should_move: bool,
    pub reason: String,
    pub route_appropriate: bool,
    /// Defaults to the current path when the name fits it
    pub route_suggestion: String,
    pub issues: Vec<String>,
}

fn relocate(placement: &mut RoutePlacement, target: &str, reason: &str, issue: &str) {
    placement.suggested_module = target.to_string();
    placement.should_move = true;
    placement.reason = reason.to_string();
    placement.issues.push(issue.to_string());
}

// A module already owning the functionality is never asked to move a route
// into itself
fn owned_by(module_id: &str, prefix: &str, canonical: &str) -> bool {
    module_id.starts_with(prefix) || module_id == canonical
}

/// Analyze where one route should live and whether its path fits its name
pub fn analyze_route(route: &RouteRecord, config: &CohesionConfig) -> RoutePlacement {
    let mut placement = RoutePlacement {
        route_id: route.id.clone(),
        path: route.path.clone(),
        method: route.method.clone(),
        name: route.name.clone(),
        current_module: route.module_id.clone(),
        suggested_module: route.module_id.clone(),
        should_move: false,
        reason: String::new(),
        route_appropriate: true,
        route_suggestion: route.path.clone(),
        issues: Vec::new(),
    };

    let path = route.path.as_str();
    let name = route.name.to_lowercase();
    let module_id = route.module_id.as_str();

    if path.starts_with("/ai/") || name.contains("ai") {
        if !module_id.starts_with("ai") {
            relocate(
                &mut placement,
                "ai-analysis",
                "AI-related functionality should be in AI module",
                "AI route in non-AI module",
            );
        }
    } else if path.starts_with("/translation/") || name.contains("translate") {
        if !module_id.starts_with("translation") {
            relocate(
                &mut placement,
                "translation",
                "Translation functionality should be in Translation module",
                "Translation route in non-translation module",
            );
        }
    } else if path.starts_with("/concept/") || name.contains("concept") {
        if !owned_by(module_id, "concept", "codex.concept") {
            relocate(
                &mut placement,
                "codex.concept",
                "Concept functionality should be in Concept module",
                "Concept route in non-concept module",
            );
        }
    } else if path.starts_with("/llm/") || name.contains("llm") {
        if !module_id.starts_with("ai") {
            relocate(
                &mut placement,
                "ai-analysis",
                "LLM functionality should be in AI module",
                "LLM route in non-AI module",
            );
        }
    } else if path.starts_with("/joy/") || name.contains("joy") {
        if !owned_by(module_id, "joy", &config.canonical_joy_module) {
            relocate(
                &mut placement,
                &config.canonical_joy_module,
                "Joy functionality should be consolidated",
                "Joy route scattered across modules",
            );
        }
    } else if path.starts_with("/resonance/") || name.contains("resonance") {
        if !owned_by(module_id, "resonance", &config.canonical_resonance_module) {
            relocate(
                &mut placement,
                &config.canonical_resonance_module,
                "Resonance functionality should be consolidated",
                "Resonance route scattered across modules",
            );
        }
    } else if path.starts_with("/storage/") && !path.starts_with("/storage-endpoints/") {
        if module_id != "codex.storage" {
            relocate(
                &mut placement,
                "codex.storage",
                "Storage functionality should be in Storage module",
                "Storage route in non-storage module",
            );
        }
    }

    if name.contains("llm-") && !path.starts_with("/llm/") {
        placement.route_appropriate = false;
        placement.route_suggestion = if path.starts_with("/ai/") {
            path.replace("/ai/", "/llm/")
        } else {
            format!("/llm{path}")
        };
        placement.issues.push("LLM route not under /llm/ path".to_string());
    }

    if name.contains("translate") && !path.starts_with("/translation/") {
        placement.route_appropriate = false;
        placement.route_suggestion = if path.starts_with("/llm/") {
            path.replace("/llm/", "/translation/")
        } else {
            format!("/translation{path}")
        };
        placement
            .issues
            .push("Translation route not under /translation/ path".to_string());
    }

    if name.contains("translate") && route.module_id.contains("llm") {
        placement
            .issues
            .push("Translation functionality in LLM module - should be separate".to_string());
    }

    placement
}

/// Placement advice for every route, in snapshot order
pub fn placement_report(
    snapshot: &InventorySnapshot,
    config: &CohesionConfig,
) -> Vec<RoutePlacement> {
    snapshot
        .routes
        .iter()
        .map(|route| analyze_route(route, config))
        .collect()
}

/// Placements flagged for relocation
pub fn routes_to_move(placements: &[RoutePlacement]) -> Vec<&RoutePlacement> {
    placements.iter().filter(|p| p.should_move).collect()
}

/// Placements whose path does not fit the route name
pub fn inappropriate_names(placements: &[RoutePlacement]) -> Vec<&RoutePlacement> {
    placements.iter().filter(|p| !p.route_appropriate).collect()
}

//! Conversion priority scoring
//!
//! An ordered, additive rule table turns a module's features, route count,
//! and flags into an integer priority, a reason string, and a strategy tag.
//! Evaluation is a fold over the table: every matching rule contributes its
//! weight and reason clause, and the last matching rule that carries a
//! strategy decides the final one.

use crate::core::ModuleRecord;
use crate::inventory::InventorySnapshot;
use crate::priority::{ConversionCandidate, ConversionStrategy};
use im::Vector;

/// Scoring input: the module plus its owned-route count
struct ScoreInput<'a> {
    module: &'a ModuleRecord,
    route_count: usize,
}

struct ScoreRule {
    weight: i32,
    strategy: Option<ConversionStrategy>,
    applies: fn(&ScoreInput) -> bool,
    clause: fn(&ScoreInput) -> String,
}

// Predicates are split out so the table below reads as the rule list it is.

fn has_ai_features(input: &ScoreInput) -> bool {
    input.module.has_feature("AI") || input.module.has_feature("LLM")
}

fn has_resonance_features(input: &ScoreInput) -> bool {
    input.module.has_feature("Resonance")
}

fn has_realtime_features(input: &ScoreInput) -> bool {
    input.module.has_feature("Real-time")
}

fn has_translation_features(input: &ScoreInput) -> bool {
    input.module.has_feature("Translation")
}

fn has_security_features(input: &ScoreInput) -> bool {
    input.module.has_feature("Security")
}

fn has_graph_features(input: &ScoreInput) -> bool {
    input.module.has_feature("Graph")
}

fn has_high_route_count(input: &ScoreInput) -> bool {
    input.route_count > 10
}

// Medium band only applies when the high band does not
fn has_medium_route_count(input: &ScoreInput) -> bool {
    input.route_count > 5 && input.route_count <= 10
}

fn is_hot_reloadable(input: &ScoreInput) -> bool {
    input.module.is_hot_reloadable
}

fn is_test_or_demo(input: &ScoreInput) -> bool {
    input.module.id_contains("test") || input.module.id_contains("demo")
}

fn is_spec_related(input: &ScoreInput) -> bool {
    input.module.id_contains("spec")
}

fn is_concept_related(input: &ScoreInput) -> bool {
    input.module.id_contains("concept")
}

fn is_core_without_hot_reload(input: &ScoreInput) -> bool {
    input.module.id_contains("core") && !input.module.is_hot_reloadable
}

fn has_no_routes(input: &ScoreInput) -> bool {
    input.route_count == 0
}

fn high_route_clause(input: &ScoreInput) -> String {
    format!("High route count ({})", input.route_count)
}

fn medium_route_clause(input: &ScoreInput) -> String {
    format!("Medium route count ({})", input.route_count)
}

macro_rules! fixed_clause {
    ($name:ident, $text:expr) => {
        fn $name(_: &ScoreInput) -> String {
            $text.to_string()
        }
    };
}

fixed_clause!(ai_clause, "AI/LLM features");
fixed_clause!(resonance_clause, "Resonance features");
fixed_clause!(realtime_clause, "Real-time features");
fixed_clause!(translation_clause, "Translation features");
fixed_clause!(security_clause, "Security features");
fixed_clause!(graph_clause, "Graph features");
fixed_clause!(hot_reload_clause, "Already hot-reloadable");
fixed_clause!(test_demo_clause, "Test/Demo module");
fixed_clause!(spec_clause, "Spec-related module");
fixed_clause!(concept_clause, "Concept management");
fixed_clause!(core_clause, "Core module - lower priority");
fixed_clause!(no_routes_clause, "No routes - limited functionality");

/// Ordered scoring rules. Order matters twice: reason clauses are joined in
/// this order, and the last matching strategy wins.
const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule {
        weight: 20,
        strategy: Some(ConversionStrategy::AiEnhanced),
        applies: has_ai_features,
        clause: ai_clause,
    },
    ScoreRule {
        weight: 15,
        strategy: Some(ConversionStrategy::ResonanceOptimized),
        applies: has_resonance_features,
        clause: resonance_clause,
    },
    ScoreRule {
        weight: 12,
        strategy: Some(ConversionStrategy::RealtimeOptimized),
        applies: has_realtime_features,
        clause: realtime_clause,
    },
    ScoreRule {
        weight: 10,
        strategy: Some(ConversionStrategy::TranslationOptimized),
        applies: has_translation_features,
        clause: translation_clause,
    },
    ScoreRule {
        weight: 8,
        strategy: Some(ConversionStrategy::SecurityFocused),
        applies: has_security_features,
        clause: security_clause,
    },
    ScoreRule {
        weight: 6,
        strategy: Some(ConversionStrategy::GraphOptimized),
        applies: has_graph_features,
        clause: graph_clause,
    },
    ScoreRule {
        weight: 8,
        strategy: None,
        applies: has_high_route_count,
        clause: high_route_clause,
    },
    ScoreRule {
        weight: 4,
        strategy: None,
        applies: has_medium_route_count,
        clause: medium_route_clause,
    },
    ScoreRule {
        weight: 5,
        strategy: Some(ConversionStrategy::HotReloadReady),
        applies: is_hot_reloadable,
        clause: hot_reload_clause,
    },
    ScoreRule {
        weight: 3,
        strategy: Some(ConversionStrategy::TestOptimized),
        applies: is_test_or_demo,
        clause: test_demo_clause,
    },
    ScoreRule {
        weight: 15,
        strategy: Some(ConversionStrategy::SpecNative),
        applies: is_spec_related,
        clause: spec_clause,
    },
    ScoreRule {
        weight: 12,
        strategy: Some(ConversionStrategy::ConceptOptimized),
        applies: is_concept_related,
        clause: concept_clause,
    },
    ScoreRule {
        weight: -5,
        strategy: None,
        applies: is_core_without_hot_reload,
        clause: core_clause,
    },
    ScoreRule {
        weight: -3,
        strategy: None,
        applies: has_no_routes,
        clause: no_routes_clause,
    },
];

/// Result of scoring a single module
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleScore {
    pub priority: u32,
    pub reason: String,
    pub strategy: ConversionStrategy,
}

/// Score one module against the ordered rule table
pub fn score_module(module: &ModuleRecord, route_count: usize) -> ModuleScore {
    let input = ScoreInput {
        module,
        route_count,
    };
    let (raw, clauses, strategy) = SCORE_RULES.iter().fold(
        (0i32, Vec::new(), ConversionStrategy::Standard),
        |(total, mut clauses, strategy), rule| {
            if !(rule.applies)(&input) {
                return (total, clauses, strategy);
            }
            clauses.push((rule.clause)(&input));
            (
                total + rule.weight,
                clauses,
                rule.strategy.unwrap_or(strategy),
            )
        },
    );
    let reason = if clauses.is_empty() {
        "Standard module".to_string()
    } else {
        clauses.join("; ")
    };
    ModuleScore {
        priority: raw.max(0) as u32,
        reason,
        strategy,
    }
}

/// Score every non-stable module in the snapshot
///
/// Stable modules never produce a candidate. Priority-0 candidates are kept:
/// they are reported, they just never qualify for a phase. The result is
/// sorted by priority descending; the sort is stable, so equal priorities
/// keep the inventory's module order.
pub fn conversion_candidates(snapshot: &InventorySnapshot) -> Vector<ConversionCandidate> {
    let counts = snapshot.route_counts();
    let mut candidates: Vec<ConversionCandidate> = snapshot
        .modules
        .iter()
        .filter(|module| !module.is_stable)
        .map(|module| {
            let routes = counts.get(module.id.as_str()).copied().unwrap_or(0);
            let score = score_module(module, routes);
            ConversionCandidate {
                id: module.id.clone(),
                name: module.name.clone(),
                priority: score.priority,
                reason: score.reason,
                features: module.features.clone(),
                routes,
                is_hot_reloadable: module.is_hot_reloadable,
                strategy: score.strategy,
            }
        })
        .collect();
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RouteRecord;
    use pretty_assertions::assert_eq;

    fn module(id: &str, features: &[&str], hot_reloadable: bool) -> ModuleRecord {
        ModuleRecord {
            id: id.to_string(),
            name: id.to_string(),
            version: "1.0.0".to_string(),
            features: features.iter().map(|s| s.to_string()).collect(),
            is_hot_reloadable: hot_reloadable,
            is_stable: false,
        }
    }

    fn route(id: &str, module_id: &str) -> RouteRecord {
        RouteRecord {
            id: id.to_string(),
            path: format!("/x/{id}"),
            method: "GET".to_string(),
            module_id: module_id.to_string(),
            name: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn ai_realtime_hot_reloadable_module_scores_45() {
        let m = module("codex.ai-analysis", &["AI", "Real-time"], true);
        let score = score_module(&m, 12);
        assert_eq!(score.priority, 45);
        assert_eq!(
            score.reason,
            "AI/LLM features; Real-time features; High route count (12); Already hot-reloadable"
        );
        assert_eq!(score.strategy, ConversionStrategy::HotReloadReady);
    }

    #[test]
    fn spec_module_with_no_routes_scores_12() {
        let m = module("codex.spec-driven", &[], false);
        let score = score_module(&m, 0);
        assert_eq!(score.priority, 12);
        assert_eq!(
            score.reason,
            "Spec-related module; No routes - limited functionality"
        );
        assert_eq!(score.strategy, ConversionStrategy::SpecNative);
    }

    #[test]
    fn negative_raw_score_clamps_to_zero() {
        let m = module("core-legacy", &[], false);
        let score = score_module(&m, 0);
        assert_eq!(score.priority, 0);
        assert_eq!(
            score.reason,
            "Core module - lower priority; No routes - limited functionality"
        );
        assert_eq!(score.strategy, ConversionStrategy::Standard);
    }

    #[test]
    fn unmatched_module_reads_standard() {
        let m = module("misc-widget", &[], false);
        let score = score_module(&m, 3);
        assert_eq!(score.priority, 0);
        assert_eq!(score.reason, "Standard module");
        assert_eq!(score.strategy, ConversionStrategy::Standard);
    }

    #[test]
    fn route_count_bands_are_exclusive() {
        let m = module("gateway", &[], false);
        assert_eq!(score_module(&m, 5).reason, "Standard module");
        assert_eq!(score_module(&m, 6).reason, "Medium route count (6)");
        assert_eq!(score_module(&m, 10).reason, "Medium route count (10)");
        assert_eq!(score_module(&m, 11).reason, "High route count (11)");
        assert_eq!(score_module(&m, 11).priority, 8);
    }

    #[test]
    fn later_strategy_rules_override_earlier_ones() {
        // AI sets ai-enhanced, then the spec-id rule takes over
        let m = module("codex.spec-tools", &["AI"], false);
        let score = score_module(&m, 0);
        assert_eq!(score.strategy, ConversionStrategy::SpecNative);
        assert_eq!(score.priority, 20 + 15 - 3);
    }

    #[test]
    fn feature_matching_is_exact() {
        // Lowercase tags do not trigger the feature rules
        let m = module("widget", &["ai", "resonance"], false);
        let score = score_module(&m, 1);
        assert_eq!(score.reason, "Standard module");
    }

    #[test]
    fn candidates_exclude_stable_modules() {
        let mut stable = module("codex.auth", &["Security"], false);
        stable.is_stable = true;
        let snapshot = crate::inventory::InventorySnapshot::from_records(
            vec![stable, module("codex.joy", &["Resonance"], false)],
            vec![],
        );
        let candidates = conversion_candidates(&snapshot);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "codex.joy");
    }

    #[test]
    fn zero_priority_candidates_are_still_reported() {
        let snapshot = crate::inventory::InventorySnapshot::from_records(
            vec![module("core-legacy", &[], false)],
            vec![],
        );
        let candidates = conversion_candidates(&snapshot);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].priority, 0);
    }

    #[test]
    fn candidates_sort_by_priority_keeping_input_order_on_ties() {
        let snapshot = crate::inventory::InventorySnapshot::from_records(
            vec![
                module("alpha", &["Graph"], false),    // 6 - 3 = 3
                module("beta", &["Security"], false),  // 8 - 3 = 5
                module("gamma", &["Graph"], false),    // 3 again
            ],
            vec![],
        );
        let candidates = conversion_candidates(&snapshot);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn candidate_route_counts_come_from_the_snapshot() {
        let snapshot = crate::inventory::InventorySnapshot::from_records(
            vec![module("codex.gateway", &[], false)],
            (0..7).map(|i| route(&format!("r{i}"), "codex.gateway")).collect(),
        );
        let candidates = conversion_candidates(&snapshot);
        assert_eq!(candidates[0].routes, 7);
        assert_eq!(candidates[0].priority, 4);
    }
}

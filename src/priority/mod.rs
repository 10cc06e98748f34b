//! Conversion prioritization
//!
//! Everything that turns an inventory snapshot into an ordered conversion
//! plan: topic classification, priority scoring, consolidation targets, and
//! phase planning.

pub mod consolidation;
pub mod planner;
pub mod scorer;
pub mod topic_classifier;

pub use consolidation::{consolidation_suggestions, suggest_target, ConsolidationSuggestion};
pub use planner::{plan_phases, ConversionPhase, PhaseEntry, PlannerConfig};
pub use scorer::{conversion_candidates, score_module, ModuleScore};
pub use topic_classifier::{classify_module, classify_text};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion approach attached to a candidate by the scorer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionStrategy {
    Standard,
    AiEnhanced,
    ResonanceOptimized,
    RealtimeOptimized,
    TranslationOptimized,
    SecurityFocused,
    GraphOptimized,
    HotReloadReady,
    TestOptimized,
    SpecNative,
    ConceptOptimized,
}

impl ConversionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionStrategy::Standard => "standard",
            ConversionStrategy::AiEnhanced => "ai-enhanced",
            ConversionStrategy::ResonanceOptimized => "resonance-optimized",
            ConversionStrategy::RealtimeOptimized => "realtime-optimized",
            ConversionStrategy::TranslationOptimized => "translation-optimized",
            ConversionStrategy::SecurityFocused => "security-focused",
            ConversionStrategy::GraphOptimized => "graph-optimized",
            ConversionStrategy::HotReloadReady => "hot-reload-ready",
            ConversionStrategy::TestOptimized => "test-optimized",
            ConversionStrategy::SpecNative => "spec-native",
            ConversionStrategy::ConceptOptimized => "concept-optimized",
        }
    }
}

impl fmt::Display for ConversionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One non-stable module's scored conversion record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionCandidate {
    pub id: String,
    pub name: String,
    pub priority: u32,
    pub reason: String,
    pub features: Vec<String>,
    pub routes: usize,
    pub is_hot_reloadable: bool,
    pub strategy: ConversionStrategy,
}

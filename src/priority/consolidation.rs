//! Consolidation targets per topic
//!
//! Scattered modules of one topic roll up into a single target module. Core
//! System has no target on purpose: core infrastructure stays where it is,
//! same as unclassified modules.

use crate::core::Topic;
use crate::inventory::InventorySnapshot;
use crate::priority::topic_classifier::classify_module;
use serde::{Deserialize, Serialize};

/// Marker target for topics that are never consolidated
pub const KEEP_SEPARATE: &str = "Keep Separate";

/// Consolidation target module for a topic, `None` when the topic keeps
/// its modules separate
pub fn suggest_target(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::AiLlm => Some("AIModule"),
        Topic::Translation => Some("TranslationModule"),
        Topic::Concept => Some("ConceptModule"),
        Topic::JoyResonance => Some("JoyModule"),
        Topic::Storage => Some("StorageModule"),
        Topic::Security => Some("SecurityModule"),
        Topic::UserManagement => Some("UserModule"),
        Topic::Communication => Some("CommunicationModule"),
        Topic::AnalysisIntelligence => Some("IntelligenceModule"),
        Topic::ApiDocumentation => Some("APIModule"),
        Topic::FutureKnowledge => Some("KnowledgeModule"),
        Topic::CoreSystem | Topic::Other => None,
    }
}

/// One module's topic and where it should fold into
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationSuggestion {
    pub module_id: String,
    pub topic: Topic,
    pub target_module: String,
}

/// Classify every module and attach its consolidation target, ordered by
/// module id
pub fn consolidation_suggestions(snapshot: &InventorySnapshot) -> Vec<ConsolidationSuggestion> {
    let mut suggestions: Vec<ConsolidationSuggestion> = snapshot
        .modules
        .iter()
        .map(|module| {
            let topic = classify_module(module);
            ConsolidationSuggestion {
                module_id: module.id.clone(),
                topic,
                target_module: suggest_target(topic).unwrap_or(KEEP_SEPARATE).to_string(),
            }
        })
        .collect();
    suggestions.sort_by(|a, b| a.module_id.cmp(&b.module_id));
    suggestions
}

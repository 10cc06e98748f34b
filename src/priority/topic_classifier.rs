//! Topic classification for inventory modules
//!
//! Modules are assigned to exactly one [`Topic`] by an ordered keyword rule
//! list. Order is behaviorally significant: a module whose id matches several
//! rules gets the first one, so `ai-concept-engine` is AI/LLM, not Concept.

use crate::core::{ModuleRecord, Topic};

/// Ordered (keywords, topic) rules, evaluated first-match-wins.
///
/// Keywords are matched case-insensitively as substrings of the module id
/// and name.
const TOPIC_RULES: &[(&[&str], Topic)] = &[
    (
        &["ai", "llm", "llm.future", "llm.response", "ucore.llm"],
        Topic::AiLlm,
    ),
    (&["translation", "translate", "language"], Topic::Translation),
    (
        &["concept", "concept-registry", "userconcept"],
        Topic::Concept,
    ),
    (
        &["joy", "resonance", "ucore.joy", "resonance-joy"],
        Topic::JoyResonance,
    ),
    (
        &["storage", "distributed-storage", "storage-endpoints"],
        Topic::Storage,
    ),
    (
        &[
            "security",
            "auth",
            "access-control",
            "digital-signature",
            "identity",
        ],
        Topic::Security,
    ),
    (
        &[
            "core", "breath", "composer", "delta", "phase", "plan", "relations",
        ],
        Topic::CoreSystem,
    ),
    (&["user", "user-contributions"], Topic::UserManagement),
    (
        &["realtime", "event-streaming", "push-notifications"],
        Topic::Communication,
    ),
    (
        &["analysis", "intelligent", "caching", "load-balancing"],
        Topic::AnalysisIntelligence,
    ),
    (
        &["openapi", "spec", "reflect", "oneshot"],
        Topic::ApiDocumentation,
    ),
    (&["future", "knowledge"], Topic::FutureKnowledge),
];

/// Classify a module into its single topic
pub fn classify_module(module: &ModuleRecord) -> Topic {
    classify_text(&module.id, &module.name)
}

// Pure function that applies classification rules in order
pub fn classify_text(id: &str, name: &str) -> Topic {
    let id = id.to_lowercase();
    let name = name.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(keywords, _)| {
            keywords
                .iter()
                .any(|kw| id.contains(kw) || name.contains(kw))
        })
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::Other)
}

pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner id assigned to routes whose module is absent from the inventory
pub const UNKNOWN_MODULE: &str = "unknown";

/// A deployable unit in the live system's inventory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_hot_reloadable: bool,
    #[serde(default)]
    pub is_stable: bool,
}

impl ModuleRecord {
    /// Exact, case-sensitive feature tag membership
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }

    /// Case-insensitive substring match against the module id
    pub fn id_contains(&self, fragment: &str) -> bool {
        self.id.to_lowercase().contains(fragment)
    }
}

/// An HTTP route exposed by a module
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: String,
    pub path: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_module_id")]
    pub module_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_module_id() -> String {
    UNKNOWN_MODULE.to_string()
}

/// Coarse functional family a module belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "AI/LLM")]
    AiLlm,
    Translation,
    Concept,
    #[serde(rename = "Joy/Resonance")]
    JoyResonance,
    Storage,
    Security,
    #[serde(rename = "Core System")]
    CoreSystem,
    #[serde(rename = "User Management")]
    UserManagement,
    Communication,
    #[serde(rename = "Analysis/Intelligence")]
    AnalysisIntelligence,
    #[serde(rename = "API/Documentation")]
    ApiDocumentation,
    #[serde(rename = "Future/Knowledge")]
    FutureKnowledge,
    Other,
}

impl Topic {
    /// Human-readable topic label
    pub fn label(&self) -> &'static str {
        match self {
            Topic::AiLlm => "AI/LLM",
            Topic::Translation => "Translation",
            Topic::Concept => "Concept",
            Topic::JoyResonance => "Joy/Resonance",
            Topic::Storage => "Storage",
            Topic::Security => "Security",
            Topic::CoreSystem => "Core System",
            Topic::UserManagement => "User Management",
            Topic::Communication => "Communication",
            Topic::AnalysisIntelligence => "Analysis/Intelligence",
            Topic::ApiDocumentation => "API/Documentation",
            Topic::FutureKnowledge => "Future/Knowledge",
            Topic::Other => "Other",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relative effort band for a conversion activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffortLevel {
    Low,
    Medium,
    High,
}

impl EffortLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EffortLevel::Low => "Low",
            EffortLevel::Medium => "Medium",
            EffortLevel::High => "High",
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

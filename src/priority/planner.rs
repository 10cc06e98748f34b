//! Migration phase planning
//!
//! Partitions the scored candidate list into at most four ordered phases.
//! Selection is greedy over the already-sorted list, so capacity-limited
//! phases keep the highest-priority eligible candidates. A candidate lands
//! in at most one phase; empty phases are omitted while keeping their fixed
//! index numbers.

use crate::core::errors::{Error, Result};
use crate::core::EffortLevel;
use crate::priority::ConversionCandidate;
use im::Vector;
use serde::{Deserialize, Serialize};

/// Configuration for phase capacities and banding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Phase 2: maximum modules converted in one wave
    #[serde(default = "default_phase2_capacity")]
    pub phase2_capacity: usize,

    /// Phase 3: maximum modules converted in one wave
    #[serde(default = "default_phase3_capacity")]
    pub phase3_capacity: usize,

    /// Restore the historical phase-4 band (0 < priority < 10). The default
    /// sweeps every unplaced positive-priority candidate into phase 4
    /// instead, so the phases cover all of them.
    #[serde(default)]
    pub strict_bands: bool,
}

fn default_phase2_capacity() -> usize {
    5
}

fn default_phase3_capacity() -> usize {
    8
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            phase2_capacity: default_phase2_capacity(),
            phase3_capacity: default_phase3_capacity(),
            strict_bands: false,
        }
    }
}

impl PlannerConfig {
    /// Configuration reproducing historical plans byte for byte
    pub fn compat() -> Self {
        Self {
            strict_bands: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.phase2_capacity == 0 || self.phase3_capacity == 0 {
            return Err(Error::Configuration(
                "phase capacities must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One scheduled module inside a phase
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseEntry {
    pub id: String,
    pub name: String,
    pub priority: u32,
}

/// An ordered batch of modules scheduled together
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionPhase {
    pub index: u32,
    pub name: String,
    pub description: String,
    pub modules: Vec<PhaseEntry>,
    pub effort: EffortLevel,
    pub timeline: String,
}

struct PhaseSpec {
    index: u32,
    name: &'static str,
    description: &'static str,
    effort: EffortLevel,
    timeline: &'static str,
}

const PHASE_SPECS: [PhaseSpec; 4] = [
    PhaseSpec {
        index: 1,
        name: "Quick Wins - Hot-Reload Ready",
        description: "Convert modules that are already hot-reloadable and high priority",
        effort: EffortLevel::Low,
        timeline: "1-2 days",
    },
    PhaseSpec {
        index: 2,
        name: "High-Impact Conversions",
        description: "Convert high-priority modules that need hot-reload setup",
        effort: EffortLevel::Medium,
        timeline: "1-2 weeks",
    },
    PhaseSpec {
        index: 3,
        name: "Medium-Priority Conversions",
        description: "Convert medium-priority modules for broader coverage",
        effort: EffortLevel::Medium,
        timeline: "2-3 weeks",
    },
    PhaseSpec {
        index: 4,
        name: "Complete Coverage",
        description: "Convert remaining modules for complete spec-driven coverage",
        effort: EffortLevel::High,
        timeline: "1-2 months",
    },
];

// Pure selection over the sorted candidate list: takes the first eligible
// unplaced candidates up to capacity and marks them placed
fn select(
    candidates: &Vector<ConversionCandidate>,
    placed: &mut [bool],
    capacity: Option<usize>,
    eligible: impl Fn(&ConversionCandidate) -> bool,
) -> Vec<usize> {
    let mut chosen = Vec::new();
    for (i, candidate) in candidates.iter().enumerate() {
        if capacity.is_some_and(|cap| chosen.len() == cap) {
            break;
        }
        if placed[i] || !eligible(candidate) {
            continue;
        }
        placed[i] = true;
        chosen.push(i);
    }
    chosen
}

fn phase_entry(candidate: &ConversionCandidate) -> PhaseEntry {
    PhaseEntry {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        priority: candidate.priority,
    }
}

/// Partition candidates into ordered migration phases
///
/// Expects the candidate list sorted by priority descending, as produced by
/// [`crate::priority::scorer::conversion_candidates`].
pub fn plan_phases(
    candidates: &Vector<ConversionCandidate>,
    config: &PlannerConfig,
) -> Vector<ConversionPhase> {
    let mut placed = vec![false; candidates.len()];

    let quick_wins = select(candidates, &mut placed, None, |c| {
        c.priority >= 20 && c.is_hot_reloadable
    });
    let high_impact = select(candidates, &mut placed, Some(config.phase2_capacity), |c| {
        c.priority >= 15 && !c.is_hot_reloadable && !c.id.to_lowercase().contains("test")
    });
    let medium = select(candidates, &mut placed, Some(config.phase3_capacity), |c| {
        (10..15).contains(&c.priority)
    });
    let remainder = if config.strict_bands {
        select(candidates, &mut placed, None, |c| {
            c.priority > 0 && c.priority < 10
        })
    } else {
        // Catch-all: everything with positive priority not yet scheduled,
        // including capacity overflow from phases 2 and 3
        select(candidates, &mut placed, None, |c| c.priority > 0)
    };

    PHASE_SPECS
        .iter()
        .zip([quick_wins, high_impact, medium, remainder])
        .filter(|(_, selection)| !selection.is_empty())
        .map(|(spec, selection)| ConversionPhase {
            index: spec.index,
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            modules: selection.iter().map(|&i| phase_entry(&candidates[i])).collect(),
            effort: spec.effort,
            timeline: spec.timeline.to_string(),
        })
        .collect()
}

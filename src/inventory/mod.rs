//! Inventory snapshot acquisition and derived views
//!
//! The engine never reaches into ambient state for records: a snapshot is
//! loaded once from an injected [`InventorySource`] and every analysis is a
//! pure function over it.

pub mod json;

use crate::core::errors::Result;
use crate::core::{ModuleRecord, RouteRecord, UNKNOWN_MODULE};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// A fetched record set plus the number of malformed records the source dropped
#[derive(Clone, Debug, Default)]
pub struct RecordBatch<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> RecordBatch<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }
}

/// Injected data source supplying the module and route inventories
///
/// A source either delivers a complete record set or fails; partial data is
/// expressed as skipped records inside a successful batch, never as a
/// half-populated snapshot.
pub trait InventorySource {
    /// Name used in diagnostics and error messages
    fn source_name(&self) -> &str;

    fn fetch_modules(&self) -> Result<RecordBatch<ModuleRecord>>;

    fn fetch_routes(&self) -> Result<RecordBatch<RouteRecord>>;
}

/// In-memory source for tests and embedding
pub struct InMemorySource {
    pub modules: Vec<ModuleRecord>,
    pub routes: Vec<RouteRecord>,
}

impl InventorySource for InMemorySource {
    fn source_name(&self) -> &str {
        "in-memory"
    }

    fn fetch_modules(&self) -> Result<RecordBatch<ModuleRecord>> {
        Ok(RecordBatch::new(self.modules.clone()))
    }

    fn fetch_routes(&self) -> Result<RecordBatch<RouteRecord>> {
        Ok(RecordBatch::new(self.routes.clone()))
    }
}

/// System-wide totals computed from a snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOverview {
    pub total_modules: usize,
    pub total_routes: usize,
    pub total_features: usize,
    pub hot_reloadable_modules: usize,
    pub stable_modules: usize,
}

/// Immutable input to every analysis pass
#[derive(Clone, Debug, Default)]
pub struct InventorySnapshot {
    pub modules: Vec<ModuleRecord>,
    pub routes: Vec<RouteRecord>,
    pub skipped_modules: usize,
    pub skipped_routes: usize,
}

impl InventorySnapshot {
    /// Load a complete snapshot from a source
    ///
    /// Either both record sets arrive or the load fails; a snapshot never
    /// mixes a fresh module list with a stale or absent route list.
    pub fn load(source: &dyn InventorySource) -> Result<Self> {
        let modules = source.fetch_modules()?;
        let routes = source.fetch_routes()?;
        log::debug!(
            "loaded {} modules and {} routes from {} ({} module / {} route records skipped)",
            modules.records.len(),
            routes.records.len(),
            source.source_name(),
            modules.skipped,
            routes.skipped,
        );
        Ok(Self {
            modules: modules.records,
            routes: routes.records,
            skipped_modules: modules.skipped,
            skipped_routes: routes.skipped,
        })
    }

    /// Build a snapshot directly from records (fixtures, embedding)
    pub fn from_records(modules: Vec<ModuleRecord>, routes: Vec<RouteRecord>) -> Self {
        Self {
            modules,
            routes,
            skipped_modules: 0,
            skipped_routes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.routes.is_empty()
    }

    /// Look up a module by id
    pub fn module(&self, id: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Owner id of a route, normalized to `"unknown"` when the referenced
    /// module is missing from the inventory
    fn owner_of<'a>(&self, route: &'a RouteRecord, known: &HashSet<&str>) -> &'a str {
        if known.contains(route.module_id.as_str()) {
            &route.module_id
        } else {
            UNKNOWN_MODULE
        }
    }

    fn known_ids(&self) -> HashSet<&str> {
        self.modules.iter().map(|m| m.id.as_str()).collect()
    }

    /// Number of routes owned by each module id
    pub fn route_counts(&self) -> HashMap<String, usize> {
        let known = self.known_ids();
        let mut counts = HashMap::new();
        for route in &self.routes {
            *counts
                .entry(self.owner_of(route, &known).to_string())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Routes grouped by owning module, in deterministic id order
    pub fn routes_by_module(&self) -> BTreeMap<&str, Vec<&RouteRecord>> {
        let known = self.known_ids();
        let mut grouped: BTreeMap<&str, Vec<&RouteRecord>> = BTreeMap::new();
        for route in &self.routes {
            grouped.entry(self.owner_of(route, &known)).or_default().push(route);
        }
        grouped
    }

    /// Feature tag to declaring module ids, in deterministic order
    pub fn feature_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for module in &self.modules {
            for tag in &module.features {
                map.entry(tag.clone()).or_default().push(module.id.clone());
            }
        }
        map
    }

    /// Totals for the plan header, computed from the snapshot itself
    pub fn overview(&self) -> SystemOverview {
        let distinct_features: BTreeSet<&str> = self
            .modules
            .iter()
            .flat_map(|m| m.features.iter().map(String::as_str))
            .collect();
        SystemOverview {
            total_modules: self.modules.len(),
            total_routes: self.routes.len(),
            total_features: distinct_features.len(),
            hot_reloadable_modules: self.modules.iter().filter(|m| m.is_hot_reloadable).count(),
            stable_modules: self.modules.iter().filter(|m| m.is_stable).count(),
        }
    }
}

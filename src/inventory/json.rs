//! JSON file inventory source
//!
//! Reads the export format of the live system's inventory endpoint: a JSON
//! object with top-level `modules` and `routes` arrays. Individual records
//! that fail to decode are skipped and counted, not fatal; a missing file or
//! a missing top-level array is an upstream-unavailable error.

use super::{InventorySource, RecordBatch};
use crate::core::errors::{Error, RecordKind, Result};
use crate::core::{ModuleRecord, RouteRecord};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug)]
pub struct JsonFileSource {
    name: String,
    document: Value,
}

impl JsonFileSource {
    /// Read and parse the inventory file once; fetches decode from the
    /// retained document
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path.display().to_string();
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| Error::unavailable(&name, e.to_string()))?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| Error::unavailable(&name, format!("not valid JSON: {e}")))?;
        Ok(Self { name, document })
    }

    fn record_array(&self, key: &str) -> Result<&[Value]> {
        self.document
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unavailable(&self.name, format!("missing '{key}' array")))
    }
}

fn decode_batch<T: DeserializeOwned>(items: &[Value], kind: RecordKind) -> RecordBatch<T> {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in items {
        match serde_json::from_value(item.clone()) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("skipping malformed {kind} record: {e}");
                skipped += 1;
            }
        }
    }
    RecordBatch { records, skipped }
}

impl InventorySource for JsonFileSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn fetch_modules(&self) -> Result<RecordBatch<ModuleRecord>> {
        Ok(decode_batch(self.record_array("modules")?, RecordKind::Module))
    }

    fn fetch_routes(&self) -> Result<RecordBatch<RouteRecord>> {
        Ok(decode_batch(self.record_array("routes")?, RecordKind::Route))
    }
}

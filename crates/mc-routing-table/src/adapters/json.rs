//! JSON file format for routing tables.
//!
//! ```json
//! [
//!   {"x": 0, "y": 0, "entries": [
//!     {"key": 8, "mask": 8, "route": 4097, "defaultable": false}
//!   ]}
//! ]
//! ```
//!
//! Routes are stored as packed route words. Loading rebuilds every table
//! through [`NodeRoutingTable::with_config`], so files holding invalid or
//! duplicate key/mask pairs are rejected with the usual domain errors.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::RoutingConfig;
use crate::domain::{NodeRoutingTable, RoutingEntry, RoutingTableError, RoutingTables};

#[derive(Debug, Serialize, Deserialize)]
struct TableRecord {
    x: u32,
    y: u32,
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    key: u32,
    mask: u32,
    route: u32,
    #[serde(default)]
    defaultable: bool,
}

impl From<&RoutingEntry> for EntryRecord {
    fn from(entry: &RoutingEntry) -> Self {
        Self {
            key: entry.key(),
            mask: entry.mask(),
            route: entry.spinnaker_route(),
            defaultable: entry.defaultable(),
        }
    }
}

impl From<&NodeRoutingTable> for TableRecord {
    fn from(table: &NodeRoutingTable) -> Self {
        Self {
            x: table.x(),
            y: table.y(),
            entries: table.all().map(EntryRecord::from).collect(),
        }
    }
}

/// Encode routing tables as pretty-printed JSON.
pub fn to_json(tables: &RoutingTables) -> Result<String, RoutingTableError> {
    let records: Vec<TableRecord> = tables.tables().map(TableRecord::from).collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| RoutingTableError::Serialization(e.to_string()))
}

/// Decode routing tables from JSON, applying `config` to every table.
///
/// `config` is validated first, even when the file holds no tables.
pub fn from_json(content: &str, config: &RoutingConfig) -> Result<RoutingTables, RoutingTableError> {
    config.validate()?;

    let records: Vec<TableRecord> = serde_json::from_str(content)
        .map_err(|e| RoutingTableError::Serialization(e.to_string()))?;

    let mut tables = RoutingTables::new();
    for record in records {
        let entries = record
            .entries
            .into_iter()
            .map(|e| RoutingEntry::from_route(e.key, e.mask, e.route, e.defaultable));
        let table = NodeRoutingTable::with_config(record.x, record.y, config.clone(), entries)?;
        tables.add_table(table)?;
    }
    Ok(tables)
}

/// Write routing tables to a JSON file.
pub fn save<P: AsRef<Path>>(tables: &RoutingTables, path: P) -> Result<(), RoutingTableError> {
    let content = to_json(tables)?;
    fs::write(path.as_ref(), content).map_err(|e| RoutingTableError::Io {
        path: path.as_ref().display().to_string(),
        error: e.to_string(),
    })?;

    info!(
        "[mc-routing] Saved {} tables ({} entries) to {}",
        tables.len(),
        tables.total_entries(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read routing tables from a JSON file.
pub fn load<P: AsRef<Path>>(
    path: P,
    config: &RoutingConfig,
) -> Result<RoutingTables, RoutingTableError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| RoutingTableError::Io {
        path: path.as_ref().display().to_string(),
        error: e.to_string(),
    })?;

    let tables = from_json(&content, config)?;
    info!(
        "[mc-routing] Loaded {} tables ({} entries) from {}",
        tables.len(),
        tables.total_entries(),
        path.as_ref().display()
    );
    Ok(tables)
}

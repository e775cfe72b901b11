//! Collection of node routing tables for a whole machine.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{NodeCoordinates, RoutingTableError};

use super::table::NodeRoutingTable;

/// All node routing tables, one per coordinate pair.
///
/// Iteration is ordered by coordinates so output built from it is stable.
#[derive(Debug, Clone, Default)]
pub struct RoutingTables {
    tables: BTreeMap<NodeCoordinates, NodeRoutingTable>,
}

impl RoutingTables {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from tables, rejecting repeated coordinates.
    pub fn from_tables<I>(tables: I) -> Result<Self, RoutingTableError>
    where
        I: IntoIterator<Item = NodeRoutingTable>,
    {
        let mut collection = Self::new();
        for table in tables {
            collection.add_table(table)?;
        }
        Ok(collection)
    }

    /// Register a node's table.
    ///
    /// # Errors
    /// `DuplicateTable` if a table for the same node is already registered.
    pub fn add_table(&mut self, table: NodeRoutingTable) -> Result<(), RoutingTableError> {
        let coords = table.coordinates();
        if self.tables.contains_key(&coords) {
            return Err(RoutingTableError::DuplicateTable {
                x: coords.x,
                y: coords.y,
            });
        }

        debug!(
            "[mc-routing] Registered table for {} ({} entries)",
            coords,
            table.count()
        );
        self.tables.insert(coords, table);
        Ok(())
    }

    /// Table for node `(x, y)`, if any
    pub fn table(&self, x: u32, y: u32) -> Option<&NodeRoutingTable> {
        self.tables.get(&NodeCoordinates::new(x, y))
    }

    /// Mutable table for node `(x, y)`, if any
    pub fn table_mut(&mut self, x: u32, y: u32) -> Option<&mut NodeRoutingTable> {
        self.tables.get_mut(&NodeCoordinates::new(x, y))
    }

    /// Unregister and return the table for node `(x, y)`
    pub fn remove_table(&mut self, x: u32, y: u32) -> Option<NodeRoutingTable> {
        self.tables.remove(&NodeCoordinates::new(x, y))
    }

    /// All tables ordered by coordinates
    pub fn tables(&self) -> impl Iterator<Item = &NodeRoutingTable> + '_ {
        self.tables.values()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Entry count of the largest table (0 when empty)
    pub fn max_number_of_entries(&self) -> usize {
        self.tables.values().map(|t| t.count()).max().unwrap_or(0)
    }

    /// Entry count across all tables
    pub fn total_entries(&self) -> usize {
        self.tables.values().map(|t| t.count()).sum()
    }
}

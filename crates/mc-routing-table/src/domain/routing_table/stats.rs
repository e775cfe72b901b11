//! Routing table statistics.

use serde::Serialize;

/// Snapshot of a node routing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingTableStats {
    /// Node x coordinate
    pub x: u32,
    /// Node y coordinate
    pub y: u32,
    /// Number of entries
    pub entries: usize,
    /// Entries default routing could replace
    pub defaultable_entries: usize,
    /// Free slots, if the table has a configured capacity
    pub capacity_remaining: Option<usize>,
}

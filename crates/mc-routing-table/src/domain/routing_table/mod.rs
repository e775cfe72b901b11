//! Routing Table Implementation
//!
//! Layers, innermost first:
//! - `store`: entries keyed by (key, mask), uniqueness enforced
//! - `table`: one store per node, node limits applied
//! - `tables`: every node table of a machine

// Semantic submodules
mod stats;
mod store;
mod table;
mod tables;

// Re-export public API
pub use stats::RoutingTableStats;
pub use store::KeyedStore;
pub use table::NodeRoutingTable;
pub use tables::RoutingTables;

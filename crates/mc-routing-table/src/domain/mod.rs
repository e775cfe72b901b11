//! Domain Layer - Pure routing table logic
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Every stored entry satisfies `key & mask == key`

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod routing_table;
pub mod value_objects;

pub use entities::RoutingEntry;
pub use errors::RoutingTableError;
pub use invariants::{invariant_key_within_mask, validate_key_mask};
pub use routing_table::{KeyedStore, NodeRoutingTable, RoutingTableStats, RoutingTables};
pub use value_objects::{
    KeyMask, NodeCoordinates, MAX_LINK_ID, MAX_PROCESSOR_ID, NUM_LINKS, PROCESSOR_SHIFT,
};

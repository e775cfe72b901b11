//! # MC Routing Table
//!
//! Per-node multicast routing tables for a 2D mesh of routers.
//!
//! Every node `(x, y)` owns a table of routing entries. An entry is
//! identified by a `(key, mask)` pair: a packet whose key satisfies
//! `packet_key & mask == key` is delivered to the entry's processors and
//! forwarded on its links.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `validate_key_mask`: the `key & mask == key` check
//!   - `KeyedStore`: entries keyed by (key, mask), uniqueness enforced
//!   - `NodeRoutingTable`: one store per node, node limits applied
//!   - `RoutingTables`: every node table of a machine
//! - **Config** (`config`): node limits, loaded from TOML
//! - **Adapters Layer** (`adapters/`): JSON file format
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: every stored entry satisfies `key & mask == key`
//! - **INVARIANT-2**: no two entries of one table share a `(key, mask)` pair
//! - **INVARIANT-3**: a failed `add` leaves the table unchanged
//!
//! `lookup` returns `Ok(None)` on a miss while `remove` returns `NotFound`:
//! a query for an absent route is normal, removing one is a caller bug.
//!
//! ## Example
//!
//! ```rust
//! use mc_routing_table::{NodeRoutingTable, RoutingEntry, RoutingTableError};
//!
//! let mut table = NodeRoutingTable::empty(0, 0);
//!
//! // Deliver to processor 1, forward on link 0
//! let entry = RoutingEntry::new(0b1000, 0b1000, vec![1], vec![0], false).unwrap();
//! table.add(entry.clone()).unwrap();
//!
//! // Key bit outside the mask
//! let bad = RoutingEntry::new(0b1001, 0b1000, vec![1], vec![], false).unwrap();
//! assert!(matches!(
//!     table.add(bad),
//!     Err(RoutingTableError::InvalidKeyMask { .. })
//! ));
//!
//! assert_eq!(table.lookup(0b1000, 0b1000).unwrap(), Some(&entry));
//! assert_eq!(table.route_for(0b1111), Some(&entry));
//! assert_eq!(table.count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;

// Re-exports
pub use config::{ConfigError, RoutingConfig};
pub use domain::{
    validate_key_mask, KeyMask, KeyedStore, NodeCoordinates, NodeRoutingTable, RoutingEntry,
    RoutingTableError, RoutingTableStats, RoutingTables, MAX_LINK_ID, MAX_PROCESSOR_ID,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

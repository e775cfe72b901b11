//! # Domain Errors
//!
//! Error types for multicast routing tables.

use thiserror::Error;

/// Routing table error types.
///
/// Every variant that concerns a single entry carries the offending key and
/// mask so callers can report which route was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingTableError {
    /// The key has bits set outside the mask (`key & mask != key`).
    #[error("Invalid key/mask: key {key:#010x} has bits outside mask {mask:#010x}")]
    InvalidKeyMask {
        /// Offending routing key
        key: u32,
        /// Offending mask
        mask: u32,
    },

    /// An entry with the same key and mask is already in the table.
    #[error("Duplicate entry: key {key:#010x} mask {mask:#010x} already present")]
    DuplicateEntry {
        /// Routing key
        key: u32,
        /// Mask
        mask: u32,
    },

    /// No entry with this key and mask exists.
    #[error("Entry not found: key {key:#010x} mask {mask:#010x}")]
    NotFound {
        /// Routing key
        key: u32,
        /// Mask
        mask: u32,
    },

    /// Processor id does not fit the route word or the configured node size.
    #[error("Processor id out of range: {processor_id} > {max}")]
    ProcessorOutOfRange {
        /// Rejected processor id
        processor_id: u8,
        /// Largest accepted processor id
        max: u8,
    },

    /// Link id does not fit the route word or the configured node size.
    #[error("Link id out of range: {link_id} > {max}")]
    LinkOutOfRange {
        /// Rejected link id
        link_id: u8,
        /// Largest accepted link id
        max: u8,
    },

    /// The table has reached its configured capacity.
    #[error("Routing table ({x}, {y}) is full: {max} entries")]
    TableFull {
        /// Node x coordinate
        x: u32,
        /// Node y coordinate
        y: u32,
        /// Configured capacity
        max: usize,
    },

    /// Two entries with different key/mask pairs cannot be merged.
    #[error(
        "Cannot merge key {key:#010x}/{mask:#010x} with key {other_key:#010x}/{other_mask:#010x}"
    )]
    MergeMismatch {
        /// Key of the receiving entry
        key: u32,
        /// Mask of the receiving entry
        mask: u32,
        /// Key of the other entry
        other_key: u32,
        /// Mask of the other entry
        other_mask: u32,
    },

    /// A table for these coordinates is already registered.
    #[error("Routing table for node ({x}, {y}) already exists")]
    DuplicateTable {
        /// Node x coordinate
        x: u32,
        /// Node y coordinate
        y: u32,
    },

    /// Node limits do not fit the route word or allow no entries.
    #[error("Invalid routing config: {0}")]
    InvalidConfig(String),

    /// Routing tables could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Routing table file could not be read or written.
    #[error("Failed to access {path}: {error}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error message
        error: String,
    },
}

impl RoutingTableError {
    /// Key/mask pair the error refers to, if any.
    pub fn key_mask(&self) -> Option<(u32, u32)> {
        match self {
            Self::InvalidKeyMask { key, mask }
            | Self::DuplicateEntry { key, mask }
            | Self::NotFound { key, mask }
            | Self::MergeMismatch { key, mask, .. } => Some((*key, *mask)),
            _ => None,
        }
    }
}

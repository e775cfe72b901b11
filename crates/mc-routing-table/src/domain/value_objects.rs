//! # Domain Value Objects
//!
//! Immutable value types identifying routes and nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of inter-node links on a mesh node.
pub const NUM_LINKS: u8 = 6;

/// Largest link id representable in a route word.
pub const MAX_LINK_ID: u8 = NUM_LINKS - 1;

/// Bit offset of processor 0 in a route word.
pub const PROCESSOR_SHIFT: u32 = NUM_LINKS as u32;

/// Largest processor id representable in a route word (32 - 6 link bits).
pub const MAX_PROCESSOR_ID: u8 = (u32::BITS - PROCESSOR_SHIFT - 1) as u8;

/// A routing key together with the mask selecting its significant bits.
///
/// This pair is the identity of a routing entry inside one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyMask {
    /// Routing key
    pub key: u32,
    /// Mask applied to incoming packet keys
    pub mask: u32,
}

impl KeyMask {
    /// Create a new key/mask pair (unvalidated).
    pub fn new(key: u32, mask: u32) -> Self {
        Self { key, mask }
    }

    /// Whether a packet key is matched by this pair.
    pub fn matches(&self, packet_key: u32) -> bool {
        packet_key & self.mask == self.key
    }
}

impl fmt::Display for KeyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}/{:#010x}", self.key, self.mask)
    }
}

/// Coordinates of a node in the mesh.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeCoordinates {
    /// X coordinate
    pub x: u32,
    /// Y coordinate
    pub y: u32,
}

impl NodeCoordinates {
    /// Create new coordinates.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for NodeCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

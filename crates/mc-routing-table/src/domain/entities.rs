//! # Domain Entities
//!
//! The multicast routing entry stored in node routing tables.

use std::collections::BTreeSet;

use super::errors::RoutingTableError;
use super::value_objects::{KeyMask, MAX_LINK_ID, MAX_PROCESSOR_ID, PROCESSOR_SHIFT};

/// A multicast routing entry.
///
/// Identified inside a table by its [`KeyMask`]. The route says where a
/// matching packet goes: to zero or more processors on this node and out of
/// zero or more links towards neighbouring nodes.
///
/// The key/mask pair is NOT validated here; tables validate it on insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingEntry {
    key_mask: KeyMask,
    processor_ids: BTreeSet<u8>,
    link_ids: BTreeSet<u8>,
    defaultable: bool,
}

impl RoutingEntry {
    /// Create a routing entry.
    ///
    /// # Errors
    /// `ProcessorOutOfRange` / `LinkOutOfRange` if an id does not fit the
    /// route word.
    pub fn new<P, L>(
        key: u32,
        mask: u32,
        processor_ids: P,
        link_ids: L,
        defaultable: bool,
    ) -> Result<Self, RoutingTableError>
    where
        P: IntoIterator<Item = u8>,
        L: IntoIterator<Item = u8>,
    {
        let processor_ids: BTreeSet<u8> = processor_ids.into_iter().collect();
        let link_ids: BTreeSet<u8> = link_ids.into_iter().collect();

        check_ids(&processor_ids, &link_ids, MAX_PROCESSOR_ID, MAX_LINK_ID)?;

        Ok(Self {
            key_mask: KeyMask::new(key, mask),
            processor_ids,
            link_ids,
            defaultable,
        })
    }

    /// Decode an entry from a packed route word.
    ///
    /// Bits `0..=5` are links, bit `6 + p` is processor `p`. Every `u32` is a
    /// valid route.
    pub fn from_route(key: u32, mask: u32, route: u32, defaultable: bool) -> Self {
        let link_ids = (0..=MAX_LINK_ID)
            .filter(|l| route & (1u32 << *l) != 0)
            .collect();
        let processor_ids = (0..=MAX_PROCESSOR_ID)
            .filter(|p| route & (1u32 << (PROCESSOR_SHIFT + u32::from(*p))) != 0)
            .collect();

        Self {
            key_mask: KeyMask::new(key, mask),
            processor_ids,
            link_ids,
            defaultable,
        }
    }

    /// Routing key
    pub fn key(&self) -> u32 {
        self.key_mask.key
    }

    /// Mask
    pub fn mask(&self) -> u32 {
        self.key_mask.mask
    }

    /// Key/mask identity of this entry
    pub fn key_mask(&self) -> KeyMask {
        self.key_mask
    }

    /// Destination processors on this node, ascending.
    pub fn processor_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.processor_ids.iter().copied()
    }

    /// Outgoing links, ascending.
    pub fn link_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.link_ids.iter().copied()
    }

    /// Whether default routing could replace this entry.
    pub fn defaultable(&self) -> bool {
        self.defaultable
    }

    /// Pack the route into a route word.
    pub fn spinnaker_route(&self) -> u32 {
        let links = self.link_ids.iter().fold(0u32, |acc, l| acc | (1u32 << *l));
        self.processor_ids
            .iter()
            .fold(links, |acc, p| acc | (1u32 << (PROCESSOR_SHIFT + u32::from(*p))))
    }

    /// Combine two entries for the same key/mask.
    ///
    /// Destinations are unioned; the result is defaultable only if both
    /// inputs are.
    pub fn merge(&self, other: &RoutingEntry) -> Result<RoutingEntry, RoutingTableError> {
        if self.key_mask != other.key_mask {
            return Err(RoutingTableError::MergeMismatch {
                key: self.key(),
                mask: self.mask(),
                other_key: other.key(),
                other_mask: other.mask(),
            });
        }

        Ok(RoutingEntry {
            key_mask: self.key_mask,
            processor_ids: self.processor_ids.union(&other.processor_ids).copied().collect(),
            link_ids: self.link_ids.union(&other.link_ids).copied().collect(),
            defaultable: self.defaultable && other.defaultable,
        })
    }

    /// Check processor and link ids against node limits tighter than the
    /// route word (e.g. an 18-processor node).
    pub(crate) fn check_limits(
        &self,
        max_processor_id: u8,
        max_link_id: u8,
    ) -> Result<(), RoutingTableError> {
        check_ids(&self.processor_ids, &self.link_ids, max_processor_id, max_link_id)
    }
}

fn check_ids(
    processor_ids: &BTreeSet<u8>,
    link_ids: &BTreeSet<u8>,
    max_processor_id: u8,
    max_link_id: u8,
) -> Result<(), RoutingTableError> {
    // Sets are ordered, the last id is the largest.
    if let Some(&processor_id) = processor_ids.last() {
        if processor_id > max_processor_id {
            return Err(RoutingTableError::ProcessorOutOfRange {
                processor_id,
                max: max_processor_id,
            });
        }
    }
    if let Some(&link_id) = link_ids.last() {
        if link_id > max_link_id {
            return Err(RoutingTableError::LinkOutOfRange {
                link_id,
                max: max_link_id,
            });
        }
    }
    Ok(())
}

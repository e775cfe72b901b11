//! # Domain Invariants
//!
//! Rules every stored routing entry must satisfy.

use super::errors::RoutingTableError;
use super::value_objects::KeyMask;

/// Invariant: a routing key has no bits set outside its mask.
///
/// A key with such bits could never be matched by any packet, since the
/// router compares `packet_key & mask` against the key.
pub fn validate_key_mask(key: u32, mask: u32) -> Result<(), RoutingTableError> {
    if key & mask != key {
        return Err(RoutingTableError::InvalidKeyMask { key, mask });
    }
    Ok(())
}

/// Same check as [`validate_key_mask`] for an already-built pair.
pub fn invariant_key_within_mask(key_mask: &KeyMask) -> Result<(), RoutingTableError> {
    validate_key_mask(key_mask.key, key_mask.mask)
}

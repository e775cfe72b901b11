//! Keyed store: routing entries indexed by their key/mask pair.

use std::collections::HashMap;

use crate::domain::{
    invariant_key_within_mask, validate_key_mask, KeyMask, RoutingEntry, RoutingTableError,
};

/// Uniqueness-checked container of routing entries.
///
/// `entries` answers exact-match lookups; `order` keeps insertion order for
/// iteration and first-match packet routing.
#[derive(Debug, Clone, Default)]
pub struct KeyedStore {
    entries: HashMap<KeyMask, RoutingEntry>,
    order: Vec<KeyMask>,
}

impl KeyedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry.
    ///
    /// # Errors
    /// - `InvalidKeyMask` if the entry's key has bits outside its mask
    /// - `DuplicateEntry` if the key/mask pair is already stored
    ///
    /// The store is unchanged on error.
    pub fn add(&mut self, entry: RoutingEntry) -> Result<(), RoutingTableError> {
        self.check_insertable(&entry)?;

        let key_mask = entry.key_mask();
        self.entries.insert(key_mask, entry);
        self.order.push(key_mask);
        Ok(())
    }

    /// Run the checks of [`KeyedStore::add`] without inserting.
    pub(crate) fn check_insertable(&self, entry: &RoutingEntry) -> Result<(), RoutingTableError> {
        let key_mask = entry.key_mask();
        invariant_key_within_mask(&key_mask)?;

        if self.entries.contains_key(&key_mask) {
            return Err(RoutingTableError::DuplicateEntry {
                key: key_mask.key,
                mask: key_mask.mask,
            });
        }
        Ok(())
    }

    /// Remove the entry with the same key/mask as `entry`.
    ///
    /// Returns the stored entry, which may differ from `entry` in its route.
    ///
    /// # Errors
    /// `NotFound` if no entry has this key/mask.
    pub fn remove(&mut self, entry: &RoutingEntry) -> Result<RoutingEntry, RoutingTableError> {
        let key_mask = entry.key_mask();
        let removed = self
            .entries
            .remove(&key_mask)
            .ok_or(RoutingTableError::NotFound {
                key: key_mask.key,
                mask: key_mask.mask,
            })?;

        if let Some(pos) = self.order.iter().position(|km| *km == key_mask) {
            self.order.remove(pos);
        }
        Ok(removed)
    }

    /// Exact-match lookup.
    ///
    /// A miss is `Ok(None)`, not an error: unlike [`KeyedStore::remove`], a
    /// query for an absent route is a normal outcome.
    ///
    /// # Errors
    /// `InvalidKeyMask` if the queried pair could never be stored.
    pub fn lookup(&self, key: u32, mask: u32) -> Result<Option<&RoutingEntry>, RoutingTableError> {
        validate_key_mask(key, mask)?;
        Ok(self.entries.get(&KeyMask::new(key, mask)))
    }

    /// Whether a key/mask pair is stored
    pub fn contains(&self, key_mask: &KeyMask) -> bool {
        self.entries.contains_key(key_mask)
    }

    /// Number of stored entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &RoutingEntry> + '_ {
        self.order.iter().filter_map(|km| self.entries.get(km))
    }
}

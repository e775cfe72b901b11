//! Per-node routing table.

use tracing::{debug, warn};

use crate::config::RoutingConfig;
use crate::domain::{NodeCoordinates, RoutingEntry, RoutingTableError};

use super::stats::RoutingTableStats;
use super::store::KeyedStore;

/// The multicast routing table of one mesh node.
///
/// Wraps a [`KeyedStore`] and applies the node limits from [`RoutingConfig`].
/// The coordinates are fixed for the lifetime of the table.
///
/// Not synchronized: callers sharing a table across threads must serialize
/// access themselves.
#[derive(Debug, Clone)]
pub struct NodeRoutingTable {
    /// Node this table belongs to
    coordinates: NodeCoordinates,
    /// Entries keyed by key/mask
    store: KeyedStore,
    /// Node limits
    config: RoutingConfig,
}

impl NodeRoutingTable {
    /// Create a table with the default configuration.
    ///
    /// Initial entries are added one at a time; the first invalid or
    /// duplicate entry aborts construction.
    ///
    /// The default node has eighteen processors (ids `0..=17`). An entry
    /// routing to processors 18 to 25 fits the route word, so
    /// [`RoutingEntry::new`] accepts it, but this table rejects it with
    /// `ProcessorOutOfRange`. Use [`NodeRoutingTable::with_config`] and
    /// [`RoutingConfig::with_max_processor_id`] for larger nodes.
    pub fn new<I>(x: u32, y: u32, entries: I) -> Result<Self, RoutingTableError>
    where
        I: IntoIterator<Item = RoutingEntry>,
    {
        Self::with_config(x, y, RoutingConfig::default(), entries)
    }

    /// Create an empty table with the default configuration
    pub fn empty(x: u32, y: u32) -> Self {
        Self {
            coordinates: NodeCoordinates::new(x, y),
            store: KeyedStore::new(),
            config: RoutingConfig::default(),
        }
    }

    /// Create a table applying `config` to every insertion.
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails [`RoutingConfig::validate`], then
    /// any error [`NodeRoutingTable::add`] reports for an initial entry.
    pub fn with_config<I>(
        x: u32,
        y: u32,
        config: RoutingConfig,
        entries: I,
    ) -> Result<Self, RoutingTableError>
    where
        I: IntoIterator<Item = RoutingEntry>,
    {
        config.validate()?;

        let mut table = Self {
            coordinates: NodeCoordinates::new(x, y),
            store: KeyedStore::new(),
            config,
        };

        for entry in entries {
            table.add(entry)?;
        }

        Ok(table)
    }

    /// X coordinate of the node
    pub fn x(&self) -> u32 {
        self.coordinates.x
    }

    /// Y coordinate of the node
    pub fn y(&self) -> u32 {
        self.coordinates.y
    }

    /// Coordinates of the node
    pub fn coordinates(&self) -> NodeCoordinates {
        self.coordinates
    }

    /// Get the configuration
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Add an entry.
    ///
    /// Checked in order: key/mask, duplicate, processor/link limits,
    /// capacity. The limits are the node's configured ones, which may be
    /// tighter than the route word. The table is unchanged on error.
    pub fn add(&mut self, entry: RoutingEntry) -> Result<(), RoutingTableError> {
        let key_mask = entry.key_mask();

        if let Err(e) = self.check_add(&entry) {
            warn!(
                "[mc-routing] {} rejected entry {}: {}",
                self.coordinates, key_mask, e
            );
            return Err(e);
        }

        self.store.add(entry)?;
        debug!(
            "[mc-routing] {} added entry {} ({} entries)",
            self.coordinates,
            key_mask,
            self.store.count()
        );
        Ok(())
    }

    fn check_add(&self, entry: &RoutingEntry) -> Result<(), RoutingTableError> {
        self.store.check_insertable(entry)?;
        entry.check_limits(self.config.max_processor_id, self.config.max_link_id)?;

        if let Some(max) = self.config.max_entries_per_table {
            if self.store.count() >= max {
                return Err(RoutingTableError::TableFull {
                    x: self.coordinates.x,
                    y: self.coordinates.y,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Remove the entry with the same key/mask as `entry`.
    ///
    /// # Errors
    /// `NotFound` if absent. Use [`NodeRoutingTable::lookup`] to probe
    /// without an error.
    pub fn remove(&mut self, entry: &RoutingEntry) -> Result<RoutingEntry, RoutingTableError> {
        let removed = self.store.remove(entry)?;
        debug!(
            "[mc-routing] {} removed entry {} ({} entries)",
            self.coordinates,
            removed.key_mask(),
            self.store.count()
        );
        Ok(removed)
    }

    /// Exact-match lookup by key and mask. A miss is `Ok(None)`.
    pub fn lookup(&self, key: u32, mask: u32) -> Result<Option<&RoutingEntry>, RoutingTableError> {
        self.store.lookup(key, mask)
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All entries, in insertion order
    pub fn all(&self) -> impl Iterator<Item = &RoutingEntry> + '_ {
        self.store.all()
    }

    /// Entry a packet with `packet_key` would be routed by.
    ///
    /// The first entry in insertion order whose mask selects its key wins,
    /// as in a router's ternary CAM.
    pub fn route_for(&self, packet_key: u32) -> Option<&RoutingEntry> {
        self.store
            .all()
            .find(|entry| entry.key_mask().matches(packet_key))
    }

    /// Number of entries default routing could replace
    pub fn number_of_defaultable_entries(&self) -> usize {
        self.store.all().filter(|e| e.defaultable()).count()
    }

    /// Get table statistics
    pub fn stats(&self) -> RoutingTableStats {
        let entries = self.store.count();
        RoutingTableStats {
            x: self.coordinates.x,
            y: self.coordinates.y,
            entries,
            defaultable_entries: self.number_of_defaultable_entries(),
            capacity_remaining: self
                .config
                .max_entries_per_table
                .map(|max| max.saturating_sub(entries)),
        }
    }
}

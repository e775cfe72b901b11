//! Shared helpers for integration tests and benchmarks.

use std::collections::{BTreeSet, HashSet, VecDeque};

use mc_routing_table::{NodeCoordinates, RoutingTables};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly fmt subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Neighbour reached through `link` on a `width` x `height` torus.
///
/// Links: 0 east, 1 north-east, 2 north, 3 west, 4 south-west, 5 south.
pub fn neighbour(
    node: NodeCoordinates,
    link: u8,
    width: u32,
    height: u32,
) -> Option<NodeCoordinates> {
    let (dx, dy): (i64, i64) = match link {
        0 => (1, 0),
        1 => (1, 1),
        2 => (0, 1),
        3 => (-1, 0),
        4 => (-1, -1),
        5 => (0, -1),
        _ => return None,
    };
    let x = (i64::from(node.x) + dx).rem_euclid(i64::from(width));
    let y = (i64::from(node.y) + dy).rem_euclid(i64::from(height));
    Some(NodeCoordinates::new(x as u32, y as u32))
}

/// A packet arriving at a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Delivery {
    /// Node the processor sits on
    pub node: NodeCoordinates,
    /// Processor id
    pub processor: u8,
}

/// Follow a multicast packet from `source` through the node tables.
///
/// Nodes without a table, or without a matching entry, drop the packet.
/// Each node is visited at most once.
pub fn trace_packet(
    tables: &RoutingTables,
    source: NodeCoordinates,
    key: u32,
    width: u32,
    height: u32,
) -> BTreeSet<Delivery> {
    let mut deliveries = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        let Some(entry) = tables
            .table(node.x, node.y)
            .and_then(|table| table.route_for(key))
        else {
            continue;
        };

        deliveries.extend(entry.processor_ids().map(|processor| Delivery { node, processor }));
        queue.extend(
            entry
                .link_ids()
                .filter_map(|link| neighbour(node, link, width, height)),
        );
    }

    deliveries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_wraps_around() {
        let origin = NodeCoordinates::new(0, 0);
        assert_eq!(neighbour(origin, 3, 4, 4), Some(NodeCoordinates::new(3, 0)));
        assert_eq!(neighbour(origin, 4, 4, 4), Some(NodeCoordinates::new(3, 3)));
        assert_eq!(neighbour(origin, 1, 4, 4), Some(NodeCoordinates::new(1, 1)));
        assert_eq!(neighbour(origin, 6, 4, 4), None);
    }

    #[test]
    fn test_trace_empty_machine_delivers_nothing() {
        let tables = RoutingTables::new();
        assert!(trace_packet(&tables, NodeCoordinates::new(0, 0), 1, 2, 2).is_empty());
    }
}

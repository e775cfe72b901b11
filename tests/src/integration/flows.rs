//! # Integration Test Flows
//!
//! Builds routing tables for a small wrap-around mesh and checks where
//! packets end up, including after a trip through the TOML config and the
//! JSON file adapter.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;

    use mc_routing_table::adapters::json;
    use mc_routing_table::{
        NodeCoordinates, NodeRoutingTable, RoutingConfig, RoutingEntry, RoutingTableError,
        RoutingTables,
    };

    use crate::support::{init_test_tracing, trace_packet, Delivery};

    const WIDTH: u32 = 2;
    const HEIGHT: u32 = 2;

    const KEY: u32 = 0x0001_0000;
    const MASK: u32 = 0xFFFF_0000;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn entry(processors: Vec<u8>, links: Vec<u8>) -> RoutingEntry {
        RoutingEntry::new(KEY, MASK, processors, links, false).unwrap()
    }

    /// Source at (0,0); sinks on (1,0) proc 3, (0,1) proc 4, (1,1) proc 5.
    fn build_machine_tables() -> RoutingTables {
        RoutingTables::from_tables(vec![
            NodeRoutingTable::new(0, 0, vec![entry(vec![], vec![0, 2])]).unwrap(),
            NodeRoutingTable::new(1, 0, vec![entry(vec![3], vec![])]).unwrap(),
            NodeRoutingTable::new(0, 1, vec![entry(vec![4], vec![0])]).unwrap(),
            NodeRoutingTable::new(1, 1, vec![entry(vec![5], vec![])]).unwrap(),
        ])
        .unwrap()
    }

    fn expected_deliveries() -> BTreeSet<Delivery> {
        [((1, 0), 3), ((0, 1), 4), ((1, 1), 5)]
            .into_iter()
            .map(|((x, y), processor)| Delivery {
                node: NodeCoordinates::new(x, y),
                processor,
            })
            .collect()
    }

    // =============================================================================
    // PACKET FLOWS
    // =============================================================================

    #[test]
    fn test_multicast_reaches_all_destinations() {
        init_test_tracing();
        let tables = build_machine_tables();

        // Any key under the mask follows the same tree
        for key in [KEY, KEY | 0x1234] {
            let delivered = trace_packet(&tables, NodeCoordinates::new(0, 0), key, WIDTH, HEIGHT);
            assert_eq!(delivered, expected_deliveries());
        }
    }

    #[test]
    fn test_unrouted_key_is_dropped() {
        init_test_tracing();
        let tables = build_machine_tables();

        let delivered =
            trace_packet(&tables, NodeCoordinates::new(0, 0), 0x0002_0000, WIDTH, HEIGHT);
        assert!(delivered.is_empty());
    }

    #[test]
    fn test_removing_branch_entry_prunes_subtree() {
        init_test_tracing();
        let mut tables = build_machine_tables();

        tables
            .table_mut(0, 1)
            .unwrap()
            .remove(&entry(vec![], vec![]))
            .unwrap();

        let delivered = trace_packet(&tables, NodeCoordinates::new(0, 0), KEY, WIDTH, HEIGHT);
        let expected: BTreeSet<Delivery> = [Delivery {
            node: NodeCoordinates::new(1, 0),
            processor: 3,
        }]
        .into_iter()
        .collect();
        assert_eq!(delivered, expected);
    }

    #[test]
    fn test_merge_adds_destination_in_place() {
        init_test_tracing();
        let mut tables = build_machine_tables();
        let table = tables.table_mut(1, 0).unwrap();

        let existing = table.lookup(KEY, MASK).unwrap().cloned().unwrap();
        let merged = existing.merge(&entry(vec![7], vec![])).unwrap();
        table.remove(&existing).unwrap();
        table.add(merged).unwrap();

        let delivered = trace_packet(&tables, NodeCoordinates::new(0, 0), KEY, WIDTH, HEIGHT);
        assert!(delivered.contains(&Delivery {
            node: NodeCoordinates::new(1, 0),
            processor: 7,
        }));
        assert_eq!(delivered.len(), 4);
    }

    // =============================================================================
    // CONFIG + FILE ADAPTER
    // =============================================================================

    #[test]
    fn test_machine_tables_survive_json_file() {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("routing.toml");
        let tables_path = dir.path().join("tables.json");

        fs::write(&config_path, "[routing]\nmax_entries_per_table = 16\n").unwrap();
        let config = RoutingConfig::load(&config_path).unwrap();

        json::save(&build_machine_tables(), &tables_path).unwrap();
        let loaded = json::load(&tables_path, &config).unwrap();

        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.table(0, 0).unwrap().config(), &config);
        let delivered = trace_packet(&loaded, NodeCoordinates::new(0, 0), KEY, WIDTH, HEIGHT);
        assert_eq!(delivered, expected_deliveries());
    }

    #[test]
    fn test_loading_into_smaller_router_fails() {
        init_test_tracing();
        let mut tables = build_machine_tables();
        let table = tables.table_mut(1, 1).unwrap();
        for i in 0..3u32 {
            let key = (i + 2) << 16;
            table
                .add(RoutingEntry::new(key, MASK, vec![1], vec![], false).unwrap())
                .unwrap();
        }
        let content = json::to_json(&tables).unwrap();

        let config = RoutingConfig::from_toml_str("[routing]\nmax_entries_per_table = 2\n").unwrap();
        assert_eq!(
            json::from_json(&content, &config).unwrap_err(),
            RoutingTableError::TableFull { x: 1, y: 1, max: 2 }
        );
    }

    #[test]
    fn test_table_stats_across_machine() {
        let tables = build_machine_tables();

        let total: usize = tables.tables().map(|t| t.stats().entries).sum();
        assert_eq!(total, tables.total_entries());
        assert_eq!(tables.max_number_of_entries(), 1);
        assert!(tables.tables().all(|t| t.stats().defaultable_entries == 0));
    }
}

//! Group lifecycle tests: removal, idle expiry and statistics

#[cfg(test)]
mod tests {
    use crate::message::api::Envelope;
    use crate::store::api::{GroupStore, MemoryGroupStore};
    use std::time::Duration;

    #[test]
    fn test_remove_group_discards_contents() {
        let store = MemoryGroupStore::new("messages".to_string());

        for n in 0..3 {
            store
                .add_to_group("messages:input", Envelope::new(format!("payload-{}", n)))
                .unwrap();
        }

        let discarded = store.remove_group("messages:input").unwrap();
        assert_eq!(discarded, 3);
        assert_eq!(store.group_count().unwrap(), 0);
        assert_eq!(store.group_size("messages:input").unwrap(), 0);
    }

    #[test]
    fn test_remove_unknown_group_is_noop() {
        let store: MemoryGroupStore<String> = MemoryGroupStore::new("messages".to_string());

        assert_eq!(store.remove_group("messages:nowhere").unwrap(), 0);
    }

    #[test]
    fn test_group_keys_lists_created_groups() {
        let store = MemoryGroupStore::new("messages".to_string());

        store
            .add_to_group("messages:orders", Envelope::new("a".to_string()))
            .unwrap();
        store
            .add_to_group("messages:audit", Envelope::new("b".to_string()))
            .unwrap();

        let mut keys = store.group_keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["messages:audit", "messages:orders"]);
    }

    #[test]
    fn test_expire_removes_only_idle_empty_groups() {
        let store = MemoryGroupStore::new("messages".to_string());

        // One drained group, one still holding an envelope
        store
            .add_to_group("messages:drained", Envelope::new("gone".to_string()))
            .unwrap();
        store.poll_from_group("messages:drained").unwrap();
        store
            .add_to_group("messages:live", Envelope::new("kept".to_string()))
            .unwrap();

        // Zero idle duration makes every empty group eligible at once
        let expired = store.expire_idle_groups(Duration::ZERO).unwrap();

        assert_eq!(expired, 1);
        let keys = store.group_keys().unwrap();
        assert_eq!(keys, vec!["messages:live"]);
        assert_eq!(store.group_size("messages:live").unwrap(), 1);
    }

    #[test]
    fn test_expire_keeps_recently_modified_groups() {
        let store = MemoryGroupStore::new("messages".to_string());

        store
            .add_to_group("messages:input", Envelope::new("gone".to_string()))
            .unwrap();
        store.poll_from_group("messages:input").unwrap();

        // A long idle window keeps the freshly drained group around
        let expired = store.expire_idle_groups(Duration::from_secs(3600)).unwrap();

        assert_eq!(expired, 0);
        assert_eq!(store.group_count().unwrap(), 1);
    }

    #[test]
    fn test_stats_reflect_groups_and_messages() {
        let store = MemoryGroupStore::new("messages".to_string());

        store
            .add_to_group("messages:orders", Envelope::new("a".to_string()))
            .unwrap();
        store
            .add_to_group("messages:orders", Envelope::new("b".to_string()))
            .unwrap();
        store
            .add_to_group("messages:audit", Envelope::new("c".to_string()))
            .unwrap();
        store
            .add_to_group("messages:drained", Envelope::new("d".to_string()))
            .unwrap();
        store.poll_from_group("messages:drained").unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_groups, 3);
        assert_eq!(stats.total_messages, 3);
        assert_eq!(stats.empty_groups, 1);
    }
}

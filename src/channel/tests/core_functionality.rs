//! Core channel functionality tests

#[cfg(test)]
mod tests {
    use crate::channel::api::{MessageChannel, PollableChannel, QueueChannel};
    use crate::message::api::Envelope;
    use crate::store::api::{GroupStore, MemoryGroupStore};
    use std::sync::Arc;
    use std::time::Duration;

    fn channel() -> QueueChannel<String> {
        let store = Arc::new(MemoryGroupStore::new("messages".to_string()));
        QueueChannel::new("input".to_string(), store)
    }

    #[tokio::test]
    async fn test_send_receive_round_trip() {
        let channel = channel();

        let envelope = Envelope::builder("123".to_string())
            .correlation_id("id1")
            .sequence(1, 3)
            .build()
            .unwrap();
        let sent_id = envelope.id();

        assert_eq!(channel.len().unwrap(), 0);
        channel.send(envelope).await.unwrap();
        assert_eq!(channel.len().unwrap(), 1);

        let received = channel
            .receive(Duration::from_millis(100))
            .await
            .unwrap()
            .expect("envelope should be waiting");

        assert_eq!(received.id(), sent_id);
        assert_eq!(received.payload(), "123");
        assert_eq!(received.correlation_id(), Some("id1"));
        assert_eq!(received.sequence_number(), 1);
        assert_eq!(received.sequence_size(), 3);

        // The round trip leaves the channel exactly where it started
        assert_eq!(channel.len().unwrap(), 0);
        assert!(channel.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_fifo_delivery_order() {
        let channel = channel();

        for payload in ["first", "second", "third"] {
            channel.send(Envelope::new(payload.to_string())).await.unwrap();
        }

        let mut received = Vec::new();
        while let Some(envelope) = channel.try_receive().unwrap() {
            received.push(envelope.into_payload());
        }

        assert_eq!(received, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_try_send_try_receive() {
        let channel = channel();

        channel.try_send(Envelope::new("payload".to_string())).unwrap();

        let received = channel.try_receive().unwrap().unwrap();
        assert_eq!(received.payload(), "payload");
        assert!(channel.try_receive().unwrap().is_none());
    }

    #[test]
    fn test_channel_accessors() {
        let channel = channel();

        assert_eq!(channel.name(), "input");
        assert_eq!(channel.group_key(), "messages:input");
        assert_eq!(channel.capacity(), 0);
    }

    #[test]
    fn test_store_wiring_is_observable() {
        let store: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::new("messages".to_string()));
        let channel = QueueChannel::new("input".to_string(), Arc::clone(&store));

        assert!(
            Arc::ptr_eq(channel.store(), &store),
            "The channel should reference exactly the store it was constructed with"
        );
    }

    #[test]
    fn test_buffered_envelopes_visible_through_store() {
        let store: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::new("messages".to_string()));
        let channel = QueueChannel::new("input".to_string(), Arc::clone(&store));

        channel.try_send(Envelope::new("held".to_string())).unwrap();

        let group = store.message_group("messages:input").unwrap();
        assert_eq!(group.size(), 1);
        assert_eq!(group.peek().unwrap().payload(), "held");
    }

    #[test]
    fn test_clear_discards_buffered_envelopes() {
        let channel = channel();

        for n in 0..4 {
            channel
                .try_send(Envelope::new(format!("payload-{}", n)))
                .unwrap();
        }

        assert_eq!(channel.clear().unwrap(), 4);
        assert!(channel.is_empty().unwrap());
        assert_eq!(channel.clear().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_channels_on_one_store_stay_separate() {
        let store: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::new("messages".to_string()));
        let orders = QueueChannel::new("orders".to_string(), Arc::clone(&store));
        let audit = QueueChannel::new("audit".to_string(), Arc::clone(&store));

        orders.send(Envelope::new("order-1".to_string())).await.unwrap();
        audit.send(Envelope::new("audit-1".to_string())).await.unwrap();

        assert_eq!(orders.len().unwrap(), 1);
        assert_eq!(audit.len().unwrap(), 1);

        let from_orders = orders.try_receive().unwrap().unwrap();
        assert_eq!(from_orders.payload(), "order-1");

        // Draining one channel leaves its sibling untouched
        assert!(orders.try_receive().unwrap().is_none());
        assert_eq!(audit.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reply_to_round_trip_through_channel() {
        let requests = channel();
        let replies: Arc<dyn MessageChannel<String>> = Arc::new(QueueChannel::new(
            "replies".to_string(),
            Arc::new(MemoryGroupStore::new("messages".to_string())),
        ));

        let envelope = Envelope::builder("question".to_string())
            .reply_to(&replies)
            .build()
            .unwrap();
        requests.send(envelope).await.unwrap();

        let received = requests.try_receive().unwrap().unwrap();
        let reply_channel = received
            .reply_to()
            .expect("reply channel should still be alive");
        assert_eq!(reply_channel.name(), "replies");
    }
}

//! Priority channel ordering and wiring tests

#[cfg(test)]
mod tests {
    use crate::channel::api::{
        ChannelError, MessageChannel, PollableChannel, PriorityChannel, QueueChannel,
    };
    use crate::message::api::Envelope;
    use crate::store::api::{GroupStore, MemoryGroupStore};
    use std::sync::Arc;

    fn priority_channel() -> PriorityChannel<String> {
        let store = Arc::new(MemoryGroupStore::with_priority("priorities".to_string()));
        PriorityChannel::new("work".to_string(), store).unwrap()
    }

    fn prioritised(payload: &str, priority: i32) -> Envelope<String> {
        Envelope::builder(payload.to_string())
            .priority(priority)
            .build()
            .unwrap()
    }

    #[test]
    fn test_construction_rejects_fifo_store() {
        let fifo: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::new("messages".to_string()));

        match PriorityChannel::new("work".to_string(), fifo) {
            Err(ChannelError::Configuration { message }) => {
                assert!(
                    message.contains("work") && message.contains("messages"),
                    "The error should name both the channel and the store: {}",
                    message
                );
            }
            other => panic!("Expected Configuration error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_construction_accepts_priority_store() {
        let store: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::with_priority("priorities".to_string()));

        let channel = PriorityChannel::new("work".to_string(), Arc::clone(&store)).unwrap();
        assert_eq!(channel.name(), "work");
        assert_eq!(channel.group_key(), "priorities:work");
        assert!(Arc::ptr_eq(channel.store(), &store));
    }

    #[tokio::test]
    async fn test_highest_priority_received_first() {
        let channel = priority_channel();

        channel.send(prioritised("low", 1)).await.unwrap();
        channel.send(prioritised("high", 9)).await.unwrap();
        channel.send(prioritised("mid", 5)).await.unwrap();

        let mut received = Vec::new();
        while let Some(envelope) = channel.try_receive().unwrap() {
            received.push(envelope.into_payload());
        }

        assert_eq!(received, vec!["high", "mid", "low"]);
    }

    #[tokio::test]
    async fn test_equal_priorities_arrive_in_send_order() {
        let channel = priority_channel();

        for payload in ["first", "second", "third"] {
            channel.send(prioritised(payload, 7)).await.unwrap();
        }

        let mut received = Vec::new();
        while let Some(envelope) = channel.try_receive().unwrap() {
            received.push(envelope.into_payload());
        }

        assert_eq!(received, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_unprioritised_envelopes_drain_last() {
        let channel = priority_channel();

        channel
            .send(Envelope::new("plain".to_string()))
            .await
            .unwrap();
        channel.send(prioritised("urgent", 3)).await.unwrap();

        let first = channel.try_receive().unwrap().unwrap();
        let second = channel.try_receive().unwrap().unwrap();
        assert_eq!(first.payload(), "urgent");
        assert_eq!(second.payload(), "plain");
    }

    #[tokio::test]
    async fn test_fifo_channel_over_priority_store_is_allowed() {
        // The capability check is one-directional: a FIFO channel works
        // over any store and simply inherits its group order
        let store: Arc<dyn GroupStore<String>> =
            Arc::new(MemoryGroupStore::with_priority("priorities".to_string()));
        let channel = QueueChannel::new("relay".to_string(), store);

        channel.send(prioritised("low", 1)).await.unwrap();
        channel.send(prioritised("high", 9)).await.unwrap();

        let first = channel.try_receive().unwrap().unwrap();
        assert_eq!(
            first.payload(),
            "high",
            "Order comes from the store's group, not the channel type"
        );
    }
}

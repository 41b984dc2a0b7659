#[cfg(test)]
mod tests {
    use textwatch::libs::channel::{channel, ChannelError, DropReason, InboxEvent};
    use textwatch::libs::protocol::{Dictionary, ProtocolError};

    #[tokio::test]
    async fn test_message_reaches_the_other_side() {
        let (watch, mut companion) = channel(4);

        watch.outbox.send(&Dictionary::fetch_request()).unwrap();
        let event = companion.inbox.recv().await.unwrap();

        assert_eq!(event, InboxEvent::Received(Dictionary::fetch_request()));
    }

    #[tokio::test]
    async fn test_both_directions() {
        let (mut watch, companion) = channel(4);

        companion.outbox.send(&Dictionary::weather_reply(12, "Bern")).unwrap();
        match watch.inbox.recv().await.unwrap() {
            InboxEvent::Received(dict) => assert_eq!(dict.temperature(), Some(12)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_full_mailbox_drops_and_reports() {
        let (watch, mut companion) = channel(1);

        watch.outbox.send(&Dictionary::fetch_request()).unwrap();
        let second = watch.outbox.send(&Dictionary::fetch_request());
        assert!(matches!(second, Err(ChannelError::Full)));

        // The drop notice comes first, then the message that did fit.
        assert_eq!(companion.inbox.recv().await, Some(InboxEvent::Dropped(DropReason::MailboxFull)));
        assert_eq!(companion.inbox.recv().await, Some(InboxEvent::Received(Dictionary::fetch_request())));
        assert_eq!(companion.inbox.try_recv(), None);
    }

    #[tokio::test]
    async fn test_malformed_bytes_arrive_as_drop() {
        let (watch, mut companion) = channel(4);

        watch.outbox.send_raw(vec![1, 2, 0]).unwrap();
        let event = companion.inbox.recv().await.unwrap();

        assert!(matches!(event, InboxEvent::Dropped(DropReason::Malformed(ProtocolError::Truncated { .. }))));
    }

    #[tokio::test]
    async fn test_closed_peer() {
        let (watch, companion) = channel(4);
        drop(companion);

        assert!(watch.outbox.is_closed());
        assert!(matches!(watch.outbox.send(&Dictionary::fetch_request()), Err(ChannelError::Closed)));
    }

    #[tokio::test]
    async fn test_recv_ends_when_peer_is_gone() {
        let (mut watch, companion) = channel(4);
        drop(companion);

        assert_eq!(watch.inbox.recv().await, None);
    }
}

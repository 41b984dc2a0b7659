//! In-process message channel between the watch face and its companion.
//!
//! Each side owns an [`Outbox`] for sending and an [`Inbox`] for receiving.
//! Messages travel as encoded [`Dictionary`] bytes through bounded mailboxes,
//! so the same failure modes as a real device link show up here:
//!
//! - **Outbox failed**: the peer is gone, [`Outbox::send`] returns
//!   [`ChannelError::Closed`].
//! - **Inbox dropped**: the peer's mailbox is full. The sender gets
//!   [`ChannelError::Full`] and the receiver is told about the loss with an
//!   [`InboxEvent::Dropped`] on its next read.
//! - **Malformed**: bytes that do not decode reach the receiver as a drop.

use super::protocol::{Dictionary, ProtocolError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Default number of messages a mailbox holds before dropping.
pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("the other end of the channel is closed")]
    Closed,
    #[error("the receiving mailbox is full, message dropped")]
    Full,
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// Why an incoming message never made it to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    MailboxFull,
    Malformed(ProtocolError),
}

/// What a read from an [`Inbox`] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxEvent {
    Received(Dictionary),
    Dropped(DropReason),
}

/// Sending half of one side of the channel.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::Sender<Vec<u8>>,
    peer_dropped: Arc<AtomicUsize>,
}

/// Receiving half of one side of the channel.
#[derive(Debug)]
pub struct Inbox {
    rx: mpsc::Receiver<Vec<u8>>,
    dropped: Arc<AtomicUsize>,
}

/// One side of the channel.
#[derive(Debug)]
pub struct Endpoint {
    pub outbox: Outbox,
    pub inbox: Inbox,
}

impl Endpoint {
    pub fn split(self) -> (Outbox, Inbox) {
        (self.outbox, self.inbox)
    }
}

/// Creates a connected pair of endpoints: `(watch, companion)`.
pub fn channel(capacity: usize) -> (Endpoint, Endpoint) {
    let (to_companion, companion_rx) = mpsc::channel(capacity.max(1));
    let (to_watch, watch_rx) = mpsc::channel(capacity.max(1));
    let watch_dropped = Arc::new(AtomicUsize::new(0));
    let companion_dropped = Arc::new(AtomicUsize::new(0));

    let watch = Endpoint {
        outbox: Outbox {
            tx: to_companion,
            peer_dropped: companion_dropped.clone(),
        },
        inbox: Inbox {
            rx: watch_rx,
            dropped: watch_dropped.clone(),
        },
    };
    let companion = Endpoint {
        outbox: Outbox {
            tx: to_watch,
            peer_dropped: watch_dropped,
        },
        inbox: Inbox {
            rx: companion_rx,
            dropped: companion_dropped,
        },
    };
    (watch, companion)
}

impl Outbox {
    /// Encodes and enqueues a message without waiting.
    pub fn send(&self, dict: &Dictionary) -> Result<(), ChannelError> {
        let bytes = dict.encode()?;
        self.send_raw(bytes)
    }

    /// Enqueues already encoded bytes.
    pub fn send_raw(&self, bytes: Vec<u8>) -> Result<(), ChannelError> {
        match self.tx.try_send(bytes) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                self.peer_dropped.fetch_add(1, Ordering::SeqCst);
                Err(ChannelError::Full)
            }
            Err(TrySendError::Closed(_)) => Err(ChannelError::Closed),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Inbox {
    /// Waits for the next event, or `None` once the peer has gone away.
    ///
    /// Pending drop notices are reported before any queued message. The
    /// method is cancel safe.
    pub async fn recv(&mut self) -> Option<InboxEvent> {
        if self.take_dropped() {
            return Some(InboxEvent::Dropped(DropReason::MailboxFull));
        }
        let bytes = self.rx.recv().await?;
        Some(decode_event(&bytes))
    }

    /// Non-blocking variant of [`Inbox::recv`].
    pub fn try_recv(&mut self) -> Option<InboxEvent> {
        if self.take_dropped() {
            return Some(InboxEvent::Dropped(DropReason::MailboxFull));
        }
        self.rx.try_recv().ok().map(|bytes| decode_event(&bytes))
    }

    fn take_dropped(&self) -> bool {
        self.dropped
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

fn decode_event(bytes: &[u8]) -> InboxEvent {
    match Dictionary::decode(bytes) {
        Ok(dict) => InboxEvent::Received(dict),
        Err(e) => InboxEvent::Dropped(DropReason::Malformed(e)),
    }
}

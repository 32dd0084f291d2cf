//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
///
/// Without a channel, events are written to the `log` facade instead, which
/// is what the console commands want.
#[derive(Clone)]
pub struct EventSender {
    sender: Option<mpsc::Sender<Event>>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Sender that logs instead of queueing.
    pub fn console() -> Self {
        Self { sender: None }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        match &self.sender {
            Some(sender) => {
                let _ = sender.send(event).await;
            }
            None => event.log(),
        }
    }

    pub async fn send_fetch_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::fetcher_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_aggregate_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::aggregator_with_level(message, event_type, log_level))
            .await;
    }
}

//! Event System
//!
//! Types and implementations for worker events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Worker that pages through the SOS feed.
    Fetcher,
    /// Worker that turns fetched records into district summaries.
    Aggregator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn fetcher_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Fetcher, msg, event_type, log_level)
    }

    pub fn aggregator_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Aggregator, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }

    /// Mirrors the event onto the `log` facade, for the console commands.
    pub fn log(&self) {
        let level: log::Level = self.log_level.into();
        log::log!(
            target: "flood_dashboard::events",
            level,
            "[{}] {}",
            self.worker,
            self.msg
        );
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_events_always_display() {
        let event = Event::fetcher_with_level(
            "Fetched 3 pages".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::aggregator_with_level(
            "12 districts".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let text = event.to_string();
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("12 districts"));
        assert_eq!(event.worker, Worker::Aggregator);
    }
}

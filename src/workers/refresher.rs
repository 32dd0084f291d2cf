//! Background worker that keeps the dashboard snapshot fresh

use super::core::EventSender;
use crate::api::{Paginator, SosApi};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::sos::Snapshot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Fetches the whole feed, aggregates it and hands the snapshot to the UI.
pub struct RefreshWorker {
    api: Arc<dyn SosApi>,
    paginator: Paginator,
    event_sender: EventSender,
    snapshot_sender: mpsc::Sender<Snapshot>,
    interval: Duration,
}

impl RefreshWorker {
    pub fn new(
        api: Arc<dyn SosApi>,
        paginator: Paginator,
        event_sender: EventSender,
        snapshot_sender: mpsc::Sender<Snapshot>,
        interval: Duration,
    ) -> Self {
        Self {
            api,
            paginator,
            event_sender,
            snapshot_sender,
            interval,
        }
    }

    /// One fetch-and-aggregate cycle. Returns whether a snapshot was sent.
    pub async fn refresh_once(&self) -> bool {
        let outcome = match self.paginator.fetch_all(self.api.as_ref(), &self.event_sender).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.event_sender
                    .send_fetch_event(
                        format!("Refresh failed: {}", e),
                        EventType::Error,
                        e.log_level(),
                    )
                    .await;
                return false;
            }
        };

        let complete = outcome.complete;
        let snapshot = outcome.into_snapshot();

        let (event_type, level) = if snapshot.inconsistencies.is_empty() {
            (EventType::Success, LogLevel::Info)
        } else {
            (EventType::Error, LogLevel::Warn)
        };
        self.event_sender
            .send_aggregate_event(
                format!(
                    "{} districts from {} records{}{}",
                    snapshot.summaries.len(),
                    snapshot.record_count,
                    if complete { "" } else { " (incomplete)" },
                    match snapshot.inconsistencies.len() {
                        0 => String::new(),
                        n => format!(", {} inconsistent rows", n),
                    }
                ),
                event_type,
                level,
            )
            .await;

        self.snapshot_sender.send(snapshot).await.is_ok()
    }

    /// Start the worker
    ///
    /// Refreshes immediately, then on every interval tick or refresh request,
    /// until `shutdown` fires or the UI drops its snapshot receiver.
    pub fn run(
        self,
        mut shutdown: broadcast::Receiver<()>,
        mut refresh_requests: mpsc::Receiver<()>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => {}
                    Some(()) = refresh_requests.recv() => {
                        self.event_sender
                            .send_fetch_event(
                                "Manual refresh requested".to_string(),
                                EventType::Refresh,
                                LogLevel::Info,
                            )
                            .await;
                        ticker.reset();
                    }
                }

                if self.snapshot_sender.is_closed() {
                    break;
                }
                self.event_sender
                    .send_event(Event::fetcher_with_level(
                        format!("Refreshing from {}", self.api.source_label()),
                        EventType::Refresh,
                        LogLevel::Debug,
                    ))
                    .await;
                self.refresh_once().await;
            }
        })
    }
}

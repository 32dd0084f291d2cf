//! Session setup and initialization

use crate::api::error::ApiError;
use crate::api::{FileSource, Paginator, SosApi, SosClient};
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, SNAPSHOT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::sos::Snapshot;
use crate::workers::RefreshWorker;
use crate::workers::core::EventSender;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for dashboard mode
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Snapshots produced by the refresh worker
    pub snapshot_receiver: mpsc::Receiver<Snapshot>,
    /// Join handle of the refresh worker
    pub join_handle: JoinHandle<()>,
    /// Shutdown sender to stop the worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// Requests an immediate refresh
    pub refresh_sender: mpsc::Sender<()>,
    /// Where the records come from
    pub source_label: String,
    /// Seconds between refreshes
    pub refresh_secs: u64,
}

/// Picks the record source: a local dump when `input` is given, otherwise the HTTP feed.
pub fn build_source(
    input: Option<&Path>,
    environment: Environment,
) -> Result<Arc<dyn SosApi>, ApiError> {
    match input {
        Some(path) => {
            let source = FileSource::load(path)?;
            if source.is_empty() {
                log::warn!("{} contains no records", path.display());
            } else {
                log::debug!("Loaded {} records from {}", source.len(), path.display());
            }
            Ok(Arc::new(source))
        }
        None => Ok(Arc::new(SosClient::new(environment)?)),
    }
}

/// Starts the refresh worker and wires its channels for the UI.
///
/// Must be called from within a tokio runtime.
pub fn setup_session(source: Arc<dyn SosApi>, paginator: Paginator, refresh_secs: u64) -> SessionData {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (snapshot_sender, snapshot_receiver) = mpsc::channel::<Snapshot>(SNAPSHOT_QUEUE_SIZE);
    let (refresh_sender, refresh_receiver) = mpsc::channel::<()>(1);
    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let source_label = source.source_label();
    let worker = RefreshWorker::new(
        source,
        paginator,
        EventSender::new(event_sender),
        snapshot_sender,
        Duration::from_secs(refresh_secs),
    );
    let join_handle = worker.run(shutdown_sender.subscribe(), refresh_receiver);

    SessionData {
        event_receiver,
        snapshot_receiver,
        join_handle,
        shutdown_sender,
        refresh_sender,
        source_label,
        refresh_secs,
    }
}

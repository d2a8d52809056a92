//! Runs search fetches on the tokio runtime and reports back to the UI
//! thread through the event channel.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::ImageSource;
use crate::ui::events::AppEvent;
use crate::ui::search::FetchRequest;

pub struct Fetcher {
    runtime: Handle,
    source: Arc<dyn ImageSource>,
    events: Sender<AppEvent>,
    in_flight: Option<JoinHandle<()>>,
}

impl Fetcher {
    pub fn new(runtime: Handle, source: Arc<dyn ImageSource>, events: Sender<AppEvent>) -> Self {
        Self {
            runtime,
            source,
            events,
            in_flight: None,
        }
    }

    /// Start `request`, aborting the fetch it supersedes.
    ///
    /// The aborted task still reports `FetchSettled` for its own
    /// generation, which the reducer ignores as stale.
    pub fn start(&mut self, request: FetchRequest) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!("aborting superseded fetch");
                previous.abort();
            }
        }
        self.in_flight = Some(spawn_fetch(
            &self.runtime,
            Arc::clone(&self.source),
            request,
            self.events.clone(),
        ));
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

/// Spawn one fetch.
///
/// Sends `FetchCompleted` with the outcome, then `FetchSettled`. The
/// settle event is sent from a scope guard owned by the task, so it also
/// goes out when the task is aborted (even before its first poll) or
/// panics.
pub fn spawn_fetch(
    runtime: &Handle,
    source: Arc<dyn ImageSource>,
    request: FetchRequest,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    let generation = request.generation;
    let events = scopeguard::guard(events, move |events| {
        let _ = events.send(AppEvent::FetchSettled { generation });
    });

    runtime.spawn(async move {
        let result = source
            .fetch_images(&request.query, request.page, request.per_page)
            .await
            .map_err(|err| err.to_string());

        let _ = events.send(AppEvent::FetchCompleted { generation, result });
    })
}

//! One-shot retrieval of the remote todo list with an observable lifecycle.

use std::sync::Arc;

use shared::{domain::TodoItem, error::FetchFailed};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{error::FetchError, transport::TodoTransport};

/// Lifecycle of the current retrieval.
///
/// `Failed` and `Succeeded` are terminal until the locator changes or the
/// resource is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Pending,
    Failed,
    Succeeded(Vec<TodoItem>),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Retrieved items; empty unless the fetch succeeded.
    pub fn data(&self) -> &[TodoItem] {
        match self {
            Self::Succeeded(items) => items,
            _ => &[],
        }
    }

    pub fn outcome(&self) -> Option<Result<&[TodoItem], FetchFailed>> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Failed => Some(Err(FetchFailed)),
            Self::Succeeded(items) => Some(Ok(items)),
        }
    }
}

/// Result of a spawned retrieval, tagged with the invocation it belongs to.
#[derive(Debug)]
pub struct FetchCompletion {
    generation: u64,
    outcome: Result<Vec<TodoItem>, FetchError>,
}

impl FetchCompletion {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Performs a single GET and decodes the body as a JSON array of items.
pub async fn retrieve(
    transport: &dyn TodoTransport,
    locator: &str,
) -> Result<Vec<TodoItem>, FetchError> {
    let response = transport
        .get(locator)
        .await
        .map_err(FetchError::Transport)?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    Ok(serde_json::from_slice(&response.body)?)
}

pub struct FetchResource {
    transport: Arc<dyn TodoTransport>,
    locator: Option<String>,
    state: FetchState,
    generation: u64,
    task: Option<JoinHandle<()>>,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl FetchResource {
    pub fn new(transport: Arc<dyn TodoTransport>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            transport,
            locator: None,
            state: FetchState::Idle,
            generation: 0,
            task: None,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a retrieval for `locator` unless that locator is already the
    /// current one. Returns whether a new retrieval was issued.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch(&mut self, locator: &str) -> bool {
        if self.locator.as_deref() == Some(locator) {
            return false;
        }

        self.abort_in_flight();
        self.generation += 1;
        self.locator = Some(locator.to_string());
        self.state = FetchState::Pending;

        let generation = self.generation;
        let transport = Arc::clone(&self.transport);
        let completions_tx = self.completions_tx.clone();
        let locator = locator.to_string();
        debug!(%locator, generation, "starting todo list fetch");
        self.task = Some(tokio::spawn(async move {
            let outcome = retrieve(transport.as_ref(), &locator).await;
            // Receiver lives as long as the resource; a send error means it was dropped.
            let _ = completions_tx.send(FetchCompletion {
                generation,
                outcome,
            });
        }));
        true
    }

    /// Waits for the next delivered completion. Returns `None` right away
    /// when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        if !self.state.is_pending() {
            return None;
        }
        self.completions_rx.recv().await
    }

    /// Applies a completion if it belongs to the current invocation.
    /// Returns `false` for stale completions, which are dropped.
    pub fn apply(&mut self, completion: FetchCompletion) -> bool {
        if completion.generation != self.generation || !self.state.is_pending() {
            debug!(
                generation = completion.generation,
                current = self.generation,
                "discarding stale todo list fetch result"
            );
            return false;
        }

        self.task = None;
        let locator = self.locator.as_deref().unwrap_or_default();
        self.state = match completion.outcome {
            Ok(items) => {
                info!(%locator, count = items.len(), "fetched todo list");
                FetchState::Succeeded(items)
            }
            Err(err) => {
                warn!(%locator, error = %err, "todo list fetch failed");
                FetchState::Failed
            }
        };
        true
    }

    /// Tears down the current invocation. A result still in flight is
    /// discarded when it arrives; the next `fetch` starts from `Idle`.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        self.generation += 1;
        self.locator = None;
        self.state = FetchState::Idle;
    }

    fn abort_in_flight(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for FetchResource {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;

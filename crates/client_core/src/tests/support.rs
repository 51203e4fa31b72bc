use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::{TodoId, TodoItem};
use tokio::sync::Notify;

use crate::{
    controller::AddObserver,
    transport::{TodoTransport, TransportResponse},
};

pub(crate) struct StubTransport {
    response: Option<TransportResponse>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
    locators: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn json(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, body.to_string())
    }

    pub(crate) fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Some(TransportResponse::new(status, body)),
            gate: None,
            calls: AtomicUsize::new(0),
            locators: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            response: None,
            gate: None,
            calls: AtomicUsize::new(0),
            locators: Mutex::new(Vec::new()),
        }
    }

    /// Holds every response until `gate` is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn locators(&self) -> Vec<String> {
        self.locators.lock().expect("locators lock").clone()
    }
}

#[async_trait]
impl TodoTransport for StubTransport {
    async fn get(&self, locator: &str) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.locators
            .lock()
            .expect("locators lock")
            .push(locator.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response
            .clone()
            .ok_or_else(|| anyhow!("connection refused"))
    }
}

#[derive(Default)]
pub(crate) struct RecordingObserver {
    pub(crate) confirmations: Mutex<Vec<String>>,
    pub(crate) focused: Mutex<Vec<TodoId>>,
}

impl AddObserver for RecordingObserver {
    fn confirm(&self, item: &TodoItem) {
        self.confirmations
            .lock()
            .expect("confirmations lock")
            .push(item.title.clone());
    }

    fn focus_newest(&self, id: TodoId) {
        self.focused.lock().expect("focused lock").push(id);
    }
}

pub(crate) fn todo(id: i64, title: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: TodoId(id),
        title: title.to_string(),
        completed,
    }
}

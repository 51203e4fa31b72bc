//! Canonical in-memory todo collection, seeded once from the remote list.

use std::sync::Arc;

use shared::domain::{TodoId, TodoItem};
use tracing::{debug, info, warn};

use crate::{
    fetch::{FetchCompletion, FetchResource, FetchState},
    reducer::{reduce, IdAllocator, TodoCommand},
    transport::TodoTransport,
    view::ListView,
};

/// Presentation hooks fired after an item is added.
pub trait AddObserver: Send + Sync {
    /// Acknowledge the newly created item to the user.
    fn confirm(&self, item: &TodoItem);
    /// Bring the newest row into view.
    fn focus_newest(&self, id: TodoId);
}

pub struct SilentAddObserver;

impl AddObserver for SilentAddObserver {
    fn confirm(&self, _item: &TodoItem) {}

    fn focus_newest(&self, _id: TodoId) {}
}

pub fn confirmation_message(title: &str) -> String {
    format!(
        "Your todo list \"{title}\" is created. Scroll down a bit to find! You can toggle the check mark as well"
    )
}

pub struct ListController {
    items: Vec<TodoItem>,
    seeded: bool,
    ids: IdAllocator,
    fetch: FetchResource,
    observer: Arc<dyn AddObserver>,
}

impl ListController {
    pub fn new(transport: Arc<dyn TodoTransport>) -> Self {
        Self::new_with_observer(transport, Arc::new(SilentAddObserver))
    }

    pub fn new_with_observer(
        transport: Arc<dyn TodoTransport>,
        observer: Arc<dyn AddObserver>,
    ) -> Self {
        Self {
            items: Vec::new(),
            seeded: false,
            ids: IdAllocator::new(),
            fetch: FetchResource::new(transport),
            observer,
        }
    }

    /// Issues the initial retrieval. Mounting again with the same locator is
    /// a no-op; a different locator restarts the fetch.
    pub fn mount(&mut self, locator: &str) {
        if self.fetch.fetch(locator) {
            info!(%locator, "mounted todo list");
        }
    }

    /// Drops any in-flight retrieval. Its result is discarded if it still
    /// arrives, and the next mount may seed again.
    pub fn unmount(&mut self) {
        debug!("unmounting todo list");
        self.fetch.cancel();
        self.seeded = false;
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch.state().is_pending()
    }

    pub async fn next_fetch_completion(&mut self) -> Option<FetchCompletion> {
        self.fetch.next_completion().await
    }

    /// Applies a retrieval result. The collection is seeded on the first
    /// successful, non-empty result only. Returns whether the result was current.
    pub fn handle_fetch_completion(&mut self, completion: FetchCompletion) -> bool {
        if !self.fetch.apply(completion) {
            return false;
        }
        if self.seeded {
            return true;
        }
        if let FetchState::Succeeded(items) = self.fetch.state() {
            if !items.is_empty() {
                let items = items.clone();
                self.seed(items);
                self.seeded = true;
            }
        }
        true
    }

    /// Waits until the in-flight retrieval, if any, has been applied.
    pub async fn settle(&mut self) {
        while let Some(completion) = self.next_fetch_completion().await {
            if self.handle_fetch_completion(completion) {
                break;
            }
        }
    }

    pub fn seed(&mut self, items: Vec<TodoItem>) {
        self.ids.observe(&items);
        self.dispatch(TodoCommand::Seed(items));
    }

    /// Appends a new item with the trimmed title. Blank titles are ignored,
    /// and so is every add once local ids are exhausted.
    pub fn add(&mut self, title: &str) -> Option<TodoId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let Some(id) = self.ids.allocate() else {
            warn!("no todo ids left above the seeded list; ignoring add");
            return None;
        };
        self.dispatch(TodoCommand::Add {
            id,
            title: title.to_string(),
        });
        debug!(%id, "added todo");

        if let Some(item) = self.items.last() {
            self.observer.confirm(item);
        }
        self.observer.focus_newest(id);
        Some(id)
    }

    /// Flips completion of the matching item. Returns `false` if no item matches.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.dispatch(TodoCommand::Toggle(id));
        true
    }

    /// Delete is not wired to any mutation; the request is only logged.
    pub fn delete(&self, id: TodoId) {
        info!(%id, "delete requested for todo");
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    pub fn view(&self) -> ListView {
        ListView::from_parts(self.fetch.state(), &self.items)
    }

    fn dispatch(&mut self, command: TodoCommand) {
        let items = std::mem::take(&mut self.items);
        self.items = reduce(items, command);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

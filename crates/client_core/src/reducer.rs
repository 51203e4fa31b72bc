//! Pure state transitions over the todo collection.

use shared::domain::{TodoId, TodoItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    Seed(Vec<TodoItem>),
    Add { id: TodoId, title: String },
    Toggle(TodoId),
}

pub fn reduce(mut items: Vec<TodoItem>, command: TodoCommand) -> Vec<TodoItem> {
    match command {
        TodoCommand::Seed(seeded) => seeded,
        TodoCommand::Add { id, title } => {
            let title = title.trim();
            if !title.is_empty() {
                items.push(TodoItem::new(id, title));
            }
            items
        }
        TodoCommand::Toggle(id) => {
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                item.completed = !item.completed;
            }
            items
        }
    }
}

/// Hands out ids for locally created items.
///
/// Every id it returns is strictly greater than any id it has observed, so
/// local ids never collide with ids assigned by the remote list. Once an id
/// at `i64::MAX` has been observed or handed out, it is exhausted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<i64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: Some(1) }
    }

    pub fn observe(&mut self, items: &[TodoItem]) {
        if let Some(max) = items.iter().map(|item| item.id.0).max() {
            self.next = match (self.next, max.checked_add(1)) {
                (Some(next), Some(above)) => Some(next.max(above)),
                _ => None,
            };
        }
    }

    pub fn allocate(&mut self) -> Option<TodoId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(TodoId(id))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

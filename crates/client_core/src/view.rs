//! View model for the todo list and its plain-text rendering.

use shared::domain::{TodoId, TodoItem};

use crate::fetch::FetchState;

pub const HEADING: &str = "Todo List";
pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error fetching data";
pub const INPUT_PLACEHOLDER: &str = "Enter new todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed,
    Ready {
        rows: Vec<RowView>,
        /// Row the view scrolls to; always the last one.
        newest: Option<TodoId>,
    },
}

impl ListView {
    /// While a fetch is pending or failed, no rows are shown at all.
    pub fn from_parts(fetch: &FetchState, items: &[TodoItem]) -> Self {
        match fetch {
            FetchState::Pending => Self::Loading,
            FetchState::Failed => Self::Failed,
            FetchState::Idle | FetchState::Succeeded(_) => {
                let rows = items
                    .iter()
                    .map(|item| RowView {
                        id: item.id,
                        title: item.title.clone(),
                        completed: item.completed,
                    })
                    .collect::<Vec<_>>();
                let newest = rows.last().map(|row| row.id);
                Self::Ready { rows, newest }
            }
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Self::Loading => vec![LOADING_TEXT.to_string()],
            Self::Failed => vec![ERROR_TEXT.to_string()],
            Self::Ready { rows, newest } => {
                let mut lines = Vec::with_capacity(rows.len() + 1);
                lines.push(HEADING.to_string());
                for row in rows {
                    let cursor = if Some(row.id) == *newest { '>' } else { ' ' };
                    lines.push(format!("{cursor} {}", render_row(row)));
                }
                lines
            }
        }
    }
}

pub fn render_row(row: &RowView) -> String {
    let mark = if row.completed { "[x]" } else { "[ ]" };
    format!("{mark} {} (#{})", row.title, row.id)
}

//! Applies parsed commands to the list controller and decides what to show.

use client_core::{view::INPUT_PLACEHOLDER, ListController};

use crate::commands::{UiCommand, HELP_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub flow: Flow,
    pub lines: Vec<String>,
}

impl Reply {
    fn show(lines: Vec<String>) -> Self {
        Self {
            flow: Flow::Continue,
            lines,
        }
    }

    fn silent() -> Self {
        Self::show(Vec::new())
    }
}

pub fn apply_command(controller: &mut ListController, command: UiCommand) -> Reply {
    match command {
        UiCommand::Add(title) => match controller.add(&title) {
            Some(_) => Reply::show(controller.view().render_lines()),
            None => Reply::silent(),
        },
        UiCommand::Toggle(id) => {
            if controller.toggle(id) {
                Reply::show(controller.view().render_lines())
            } else {
                Reply::silent()
            }
        }
        UiCommand::Delete(id) => {
            controller.delete(id);
            Reply::silent()
        }
        UiCommand::List => Reply::show(controller.view().render_lines()),
        UiCommand::Help => Reply::show(help_lines()),
        UiCommand::Quit => Reply {
            flow: Flow::Quit,
            lines: Vec::new(),
        },
    }
}

pub fn help_lines() -> Vec<String> {
    std::iter::once(format!("{INPUT_PLACEHOLDER}: add <title>"))
        .chain(HELP_TEXT.lines().map(str::to_string))
        .collect()
}

/// Lets a fetch still in flight land before the session ends, so its result
/// is shown even when input closes early. Returns nothing if no fetch was pending.
pub async fn finish_pending_fetch(controller: &mut ListController) -> Vec<String> {
    if !controller.fetch_in_flight() {
        return Vec::new();
    }
    controller.settle().await;
    controller.view().render_lines()
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

//! Line commands typed by the user at the prompt.

use shared::domain::TodoId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list of commands")]
    Unknown(String),
    #[error("'{command}' expects a numeric todo id, got '{raw}'")]
    InvalidId { command: &'static str, raw: String },
    #[error("'{0}' expects a todo id")]
    MissingId(&'static str),
}

pub const HELP_TEXT: &str = "\
commands:
  add <title>    add a todo at the end of the list
  toggle <id>    flip the check mark of a todo
  delete <id>    request deletion of a todo
  list           show the list again
  help           show this help
  quit           exit";

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// The title given to `add` is passed through untouched; trimming and the
/// empty-title rule belong to the list controller.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, CommandError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => UiCommand::Add(rest.to_string()),
        "toggle" | "t" => UiCommand::Toggle(parse_id("toggle", rest)?),
        "delete" | "d" => UiCommand::Delete(parse_id("delete", rest)?),
        "list" | "ls" => UiCommand::List,
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" | "q" => UiCommand::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(command: &'static str, raw: &str) -> Result<TodoId, CommandError> {
    let raw = raw.trim().trim_start_matches('#');
    if raw.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    raw.parse::<i64>()
        .map(TodoId)
        .map_err(|_| CommandError::InvalidId {
            command,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;

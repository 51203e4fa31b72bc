use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{confirmation_message, AddObserver, HttpTransport, ListController};
use shared::domain::{TodoId, TodoItem};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod session;

use commands::parse_command;
use config::{load_settings, validate_resource_url};
use session::{apply_command, finish_pending_fetch, help_lines, Flow};

#[derive(Parser, Debug)]
#[command(name = "todo-desktop", about = "Terminal todo list seeded from a remote endpoint")]
struct Args {
    /// Endpoint returning the initial todo list as a JSON array.
    #[arg(long)]
    resource_url: Option<String>,
    /// Config file; defaults to ./todo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

struct TerminalAddObserver;

impl AddObserver for TerminalAddObserver {
    fn confirm(&self, item: &TodoItem) {
        println!("{}", confirmation_message(&item.title));
    }

    fn focus_newest(&self, id: TodoId) {
        println!("(new todo #{id} is marked with '>' at the bottom of the list)");
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings(args.config.as_deref())?;
    let resource_url = validate_resource_url(
        args.resource_url
            .as_deref()
            .unwrap_or(&settings.resource_url),
    )?;

    let mut controller = ListController::new_with_observer(
        Arc::new(HttpTransport::new()),
        Arc::new(TerminalAddObserver),
    );
    controller.mount(&resource_url);
    print_lines(&controller.view().render_lines());
    print_lines(&help_lines());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(completion) = controller.next_fetch_completion(), if controller.fetch_in_flight() => {
                if controller.handle_fetch_completion(completion) {
                    print_lines(&controller.view().render_lines());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    print_lines(&finish_pending_fetch(&mut controller).await);
                    break;
                };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                let reply = apply_command(&mut controller, command);
                print_lines(&reply.lines);
                if reply.flow == Flow::Quit {
                    break;
                }
            }
        }
    }

    controller.unmount();
    info!("todo list closed");
    Ok(())
}

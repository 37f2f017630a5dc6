mod commands;
mod config;
mod logging;
mod page;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use board_core::PageEvent;
use board_engine::{load_selected_file, Board, Document, ReqwestTransport};
use board_logging::{board_error, board_info, board_warn};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{parse_command, Command};
use crate::logging::LogDestination;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    // Logging is configured by the file, so a load failure is reported once
    // the logger exists.
    let loaded = config::load(&path);
    let destination = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.log_destination.as_deref());
    logging::initialize(LogDestination::from_setting(destination), LevelFilter::Info);
    let config = loaded.unwrap_or_else(|err| {
        board_warn!("{}; using defaults", err);
        config::ClientConfig::default()
    });
    board_info!("board client starting against {}", config.board.base_url);

    let doc = Arc::new(page::seeded_document(&config));
    let transport =
        Arc::new(ReqwestTransport::new(&config.board).context("cannot build HTTP client")?);
    let board = Board::attach(doc.clone(), transport, config.board.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Alerts => {
                for alert in page::describe_alerts(&doc, board.settings()) {
                    println!("{alert}");
                }
            }
            Command::Show(selector) => match doc.content(&selector) {
                Some(content) => println!("{content}"),
                None => eprintln!("{selector}: not on page"),
            },
            Command::Preview(file) => match load_selected_file(&file) {
                Ok(selected) => {
                    let shown = board.preview_image(Some(&selected));
                    println!("preview {}", if shown { "shown" } else { "unavailable" });
                }
                Err(err) => board_error!("cannot read {:?}: {}", file, err),
            },
            Command::Event(PageEvent::NoOp) => {}
            Command::Event(event) => {
                if let Some(outcome) = board.handle(event).await {
                    println!("{outcome:?}");
                }
            }
        }
    }

    board_info!("board client exiting");
    Ok(())
}

//! One stdin line, one command.

use std::path::PathBuf;

use board_core::{PageEvent, ResponseStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(PageEvent),
    /// Read a local image and show it in the preview element.
    Preview(PathBuf),
    /// Print the alerts currently on the page.
    Alerts,
    /// Print an element's current content.
    Show(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: {value:?} is not a number")]
    NotANumber { command: &'static str, value: String },
    #[error("unknown response status {0:?} (pending, accepted, rejected)")]
    UnknownStatus(String),
}

/// Blank lines parse to `NoOp`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((line, ""));

    let event = match name {
        "" => PageEvent::NoOp,
        "quit" | "exit" => return Ok(Command::Quit),
        "alerts" => return Ok(Command::Alerts),
        "show" => return Ok(Command::Show(required("show", "selector", rest)?.to_string())),
        "preview" => return Ok(Command::Preview(PathBuf::from(required("preview", "path", rest)?))),
        "search" => PageEvent::SearchInput(rest.to_string()),
        "submit" => PageEvent::FormSubmitted {
            form: required("submit", "form selector", rest)?.to_string(),
        },
        "more" => PageEvent::LoadMoreClicked {
            trigger: required("more", "trigger selector", rest)?.to_string(),
        },
        "dismiss" => PageEvent::AlertDismissed(number("dismiss", "alert id", rest)?),
        "toggle-post" => PageEvent::TogglePost {
            post_id: number("toggle-post", "post id", rest)?,
        },
        "toggle-response" => {
            let (id, status) = rest.split_once(char::is_whitespace).ok_or(
                CommandError::MissingArgument {
                    command: "toggle-response",
                    argument: "status",
                },
            )?;
            let status = status.trim();
            PageEvent::ToggleResponse {
                response_id: number("toggle-response", "response id", id)?,
                status: ResponseStatus::parse(status)
                    .ok_or_else(|| CommandError::UnknownStatus(status.to_string()))?,
            }
        }
        "read" => PageEvent::MarkRead {
            notification_id: number("read", "notification id", rest)?,
        },
        "read-all" => PageEvent::MarkAllRead,
        "count" => PageEvent::RefreshCount,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Command::Event(event))
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

fn number(command: &'static str, argument: &'static str, value: &str) -> Result<u64, CommandError> {
    required(command, argument, value)?
        .parse()
        .map_err(|_| CommandError::NotANumber {
            command,
            value: value.to_string(),
        })
}

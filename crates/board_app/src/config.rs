//! On-disk configuration for the headless client (`board.ron`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use board_core::FormData;
use board_engine::BoardSettings;
use board_logging::board_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "board.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// A form the client can submit with `submit <selector>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSeed {
    pub selector: String,
    pub action: String,
    #[serde(default)]
    pub fields: Vec<(String, String)>,
}

impl FormSeed {
    pub fn form_data(&self) -> FormData {
        self.fields
            .iter()
            .fold(FormData::new(self.action.clone()), |form, (name, value)| {
                form.with_text(name.clone(), value.clone())
            })
    }
}

/// A paginated list with its first "load more" trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSeed {
    pub trigger: String,
    pub url: String,
    pub container: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub board: BoardSettings,
    /// Session cookies as the browser would send them, e.g. `csrftoken=...`.
    pub cookie: String,
    /// `terminal`, `file` or `both`.
    pub log_destination: Option<String>,
    pub forms: Vec<FormSeed>,
    pub lists: Vec<ListSeed>,
}

/// A missing file is not an error: it yields the defaults.
pub fn load(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            board_info!("No config at {:?}; using defaults", path);
            return Ok(ClientConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::{load, ClientConfig, ConfigError};

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("board.ron")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.board.debounce_ms, 300);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.ron");
        fs::write(
            &path,
            r##"(
                board: (
                    base_url: "https://board.example",
                    poll_interval_ms: 60000,
                    messages: (form_success: "Готово"),
                ),
                cookie: "csrftoken=abc",
                forms: [(
                    selector: "#post-form",
                    action: "/post/create/",
                    fields: [("title", "Ищу танка")],
                )],
            )"##,
        )
        .unwrap();

        let config = load(&path).unwrap();

        assert_eq!(config.board.base_url, "https://board.example");
        assert_eq!(config.board.poll_interval_ms, 60_000);
        assert_eq!(config.board.min_query_chars, 2);
        assert_eq!(config.board.messages.form_success, "Готово");
        assert_eq!(config.board.messages.form_failed, "Произошла ошибка!");
        assert_eq!(config.cookie, "csrftoken=abc");
        let form = config.forms[0].form_data();
        assert_eq!(form.action, "/post/create/");
        assert_eq!(form.text("title"), Some("Ищу танка"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.ron");
        fs::write(&path, "(board: [").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse { .. })));
    }
}

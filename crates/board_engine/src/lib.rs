//! Board engine: async handlers that talk to the backend and update the page.
mod alerts;
mod board;
mod config;
mod decode;
mod dispatch;
mod dom;
mod guard;
mod loader;
mod poller;
mod preview;
mod search;
mod transport;
mod types;

pub use alerts::AlertPresenter;
pub use board::{confirm_delete, Board};
pub use config::{BoardSettings, Selectors};
pub use decode::decode_body;
pub use dispatch::ActionDispatcher;
pub use dom::{Document, Element, MemoryDocument};
pub use guard::ControlGuard;
pub use loader::ListLoader;
pub use poller::{BadgePoller, BadgeRefresher};
pub use preview::{image_data_uri, load_selected_file, mime_for_file_name, preview_image};
pub use search::DebouncedSearch;
pub use transport::{ReqwestTransport, Transport};
pub use types::{FailureKind, Reply, RequestError};

pub use board_core::{format_date, truncate_text};

#![deny(missing_docs)]
//! Logging for the board client.
//!
//! The handlers never surface transport or parse failures to the page beyond
//! a generic alert; the detail goes to the log. Levels are used as follows:
//! `board_error!` for failed round-trips, `board_warn!` for page regions or
//! cookies that are missing, `board_info!` for attach and shutdown,
//! `board_debug!` for settled requests and ignored clicks, `board_trace!` for
//! alert lifecycles.

/// Alert lifecycle and other per-element chatter.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Settled requests, discarded search replies, ignored clicks.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Page attach, client start and exit.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Something the page expected is not there: a badge, a container, the
/// anti-forgery cookie. The handler carries on.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// A round-trip failed in transport or could not be parsed.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// HTTP stack crates whose debug output drowns the board's own lines.
const QUIET_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Installs a terminal logger for tests. Calling it again, or after another
/// logger was installed, does nothing.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut config = ConfigBuilder::new();
    for target in QUIET_TARGETS {
        config.add_filter_ignore_str(target);
    }

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        config.build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_expand_without_a_logger() {
        board_trace!("alert {} expired", 1);
        board_debug!("discarding stale results for {:?}", "ab");
        board_info!("board attached to {}", "http://127.0.0.1:8000");
        board_warn!("status badge {} not on page", ".status-badge");
        board_error!("Error performing search: {}", "timeout");
    }

    #[test]
    fn repeated_initialization_is_harmless() {
        super::initialize_for_tests();
        super::initialize_for_tests();
        board_info!("logger initialized twice");
    }
}

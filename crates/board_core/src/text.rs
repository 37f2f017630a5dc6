use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

const ELLIPSIS: &str = "...";

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("unrecognized date: {0:?}")]
    Unrecognized(String),
}

/// Cuts `text` to `max_chars` characters and appends `...` when anything was
/// cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((end, _)) => format!("{}{ELLIPSIS}", &text[..end]),
    }
}

/// Long Russian date with time, e.g. `5 марта 2024 г., 09:07`.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    let month = MONTHS_GENITIVE[value.month0() as usize];
    format!(
        "{} {month} {} г., {:02}:{:02}",
        value.day(),
        value.year(),
        value.hour(),
        value.minute()
    )
}

/// Parses RFC 3339, ISO-like `YYYY-MM-DD[ HH:MM[:SS]]` or the backend's
/// `DD.MM.YYYY HH:MM` and formats it with [`format_datetime`]. Offsets are not
/// converted; the wall-clock time of the input is shown.
pub fn format_date(input: &str) -> Result<String, DateFormatError> {
    let trimmed = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(format_datetime(&parsed.naive_local()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(format_datetime(&parsed));
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| format_datetime(&value))
        .ok_or_else(|| DateFormatError::Unrecognized(input.to_string()))
}

/// Markup a busy control shows in place of its label.
pub fn loading_markup(label: &str) -> String {
    format!("<span class=\"spinner-border spinner-border-sm me-2\"></span>{label}")
}

#[cfg(test)]
mod tests {
    use super::{loading_markup, truncate_text};

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_text("привет мир", 6), "привет...");
    }

    #[test]
    fn exact_length_is_untouched() {
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("", 0), "");
    }

    #[test]
    fn loading_markup_wraps_label() {
        assert_eq!(
            loading_markup("Загрузка..."),
            "<span class=\"spinner-border spinner-border-sm me-2\"></span>Загрузка..."
        );
    }
}

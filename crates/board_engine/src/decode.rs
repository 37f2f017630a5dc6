use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::{FailureKind, RequestError};

/// Decode a reply body into UTF-8 using: BOM -> Content-Type charset ->
/// chardetng fallback. Bodies that do not decode cleanly are parse failures.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<String, RequestError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim_matches([' ', '"', '\''].as_ref()).to_string())
            } else {
                None
            }
        })
        .next()
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<String, RequestError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(RequestError::new(
            FailureKind::Parse,
            format!("body is not valid {}", enc.name()),
        ));
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::decode_body;
    use crate::FailureKind;

    #[test]
    fn utf8_charset_header_is_honoured() {
        let body = "Уведомление".as_bytes();
        assert_eq!(
            decode_body(body, Some("application/json; charset=utf-8")).unwrap(),
            "Уведомление"
        );
    }

    #[test]
    fn windows_1251_fragment_is_decoded() {
        // "Привет" in windows-1251
        let body = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        assert_eq!(
            decode_body(&body, Some("text/html; Charset=\"windows-1251\"")).unwrap(),
            "Привет"
        );
    }

    #[test]
    fn bom_wins_over_header() {
        let body = b"\xEF\xBB\xBFok";
        assert_eq!(decode_body(body, Some("text/html; charset=iso-8859-1")).unwrap(), "ok");
    }

    #[test]
    fn invalid_utf8_is_a_parse_failure() {
        let err = decode_body(b"caf\xe9", Some("text/html; charset=utf-8"));
        assert_eq!(err.unwrap_err().kind, FailureKind::Parse);
    }
}

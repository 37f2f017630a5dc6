use percent_encoding::percent_decode_str;

/// Looks up `name` in a `document.cookie`-style string (`a=1; b=2`) and
/// returns its percent-decoded value.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

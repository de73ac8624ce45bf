//! HTTP request handlers for the REST API.

pub mod conversation;
pub mod message;
pub mod quick_action;

/// Parse a path id from its leading integer: `"12abc"` is 12, `"abc"` is `None`.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}

// src/encoding.rs

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_CHARSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex"));

/// `<meta charset=...>` and the `http-equiv` form both end in `charset=...`.
static META_CHARSET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("valid regex")
});

/// Pick the page encoding: `Content-Type` header, then a `<meta>` declaration
/// in the first 1024 bytes, then UTF-8.
pub fn detect_encoding(content_type: Option<&str>, body: &[u8]) -> &'static Encoding {
    let from_header = content_type
        .and_then(|ct| HEADER_CHARSET_RE.captures(ct))
        .and_then(|c| Encoding::for_label(c[1].as_bytes()));
    if let Some(enc) = from_header {
        return enc;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| Encoding::for_label(c[1].as_bytes()))
        .unwrap_or(UTF_8)
}

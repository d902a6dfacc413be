//! Base64 transforms and data-URL classification
//!
//! This module provides the pure transforms between image bytes and their
//! Base64 representations, plus the predicate used to classify decode input.
//! No I/O happens here.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{self, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;

/// Forgiving decode engine: padding optional, non-zero trailing bits allowed.
/// Combined with the alphabet filter in [`decode_lenient`] this engine can
/// never reject its input.
const LENIENT: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::STANDARD,
    engine::GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent),
);

/// Grammar for a Base64 data URL: optional `data:` prefix, optional MIME
/// type, optional `;key=value` parameter, optional `;base64` marker, a
/// mandatory comma, then a body of URL-safe characters. Case-insensitive,
/// leading and trailing whitespace allowed.
static DATA_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:data:)?(?:[a-z]+/[a-z0-9.+\-]+)?(?:;[a-z\-]+=[a-z0-9\-]+)?(?:;base64)?,[a-z0-9!$&',()*+;=\-._~:@/?%\s]*$",
    )
    .expect("data-URL pattern is valid")
});

/// Result of an encode operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Standard Base64 text of the fetched image bytes
    Text(String),

    /// The fetched bytes reinterpreted as Base64 text and decoded.
    ///
    /// Note the quirk: this is *not* the Base64 encoding of the image. The
    /// buffer form runs the raw fetched bytes through a Base64 *decode*, a
    /// reinterpretation kept for compatibility with the interface this crate
    /// replaces. Callers wanting the image bytes themselves should fetch with
    /// `as_string: true` and decode the string.
    Buffer(Vec<u8>),
}

impl Encoded {
    /// The string form, if this is [`Encoded::Text`]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Encoded::Text(s) => Some(s),
            Encoded::Buffer(_) => None,
        }
    }

    /// The buffer form, if this is [`Encoded::Buffer`]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Encoded::Text(_) => None,
            Encoded::Buffer(b) => Some(b),
        }
    }
}

/// Input accepted by [`decode`](crate::decode)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A raw byte buffer, accepted without further inspection
    Buffer(Vec<u8>),
    /// A string, which must match the data-URL grammar to be accepted
    Text(String),
}

impl Payload {
    /// The payload content as bytes, whichever form it is in
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Buffer(b) => b,
            Payload::Text(s) => s.as_bytes(),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Buffer(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Buffer(bytes.to_vec())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

/// Encode bytes as standard Base64 text. No line wrapping is ever applied.
pub fn encode_to_string(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Interpret `data` as Base64 text and decode it, forgivingly.
///
/// Bytes outside the Base64 alphabet are skipped (so `=` padding, the
/// `data:image/...;base64,` separators of a data URL, and whitespace are all
/// tolerated) and a trailing lone symbol is dropped. This mirrors the
/// never-failing Base64 decode of the interface this crate replaces, which
/// both the [`Encoded::Buffer`] quirk and the persister depend on.
pub fn decode_lenient(data: &[u8]) -> Vec<u8> {
    let mut filtered: Vec<u8> = data
        .iter()
        .copied()
        .filter(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
        .collect();
    // A single leftover symbol carries fewer than 8 bits and decodes to nothing.
    if filtered.len() % 4 == 1 {
        filtered.pop();
    }
    // Filtered to the alphabet and trimmed to a decodable length, so the
    // lenient engine cannot fail.
    LENIENT.decode(&filtered).unwrap_or_default()
}

/// Check whether `candidate` is a Base64 data URL.
///
/// Pure predicate with no side effects. The grammar: optional `data:` prefix,
/// optional MIME type, optional `;key=value` parameter, optional `;base64`
/// marker, a mandatory comma, then a URL-safe body. Matching is
/// case-insensitive and tolerates surrounding whitespace.
pub fn is_data_url(candidate: &str) -> bool {
    DATA_URL.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_to_string() {
        assert_eq!(encode_to_string(b"hello"), "aGVsbG8=");
        assert_eq!(encode_to_string(b""), "");
    }

    #[test]
    fn test_decode_lenient_standard() {
        assert_eq!(decode_lenient(b"aGVsbG8="), b"hello");
        assert_eq!(decode_lenient(b"aGVsbG8"), b"hello");
    }

    #[test]
    fn test_decode_lenient_skips_foreign_bytes() {
        assert_eq!(decode_lenient(b"aGVs bG8=\n"), b"hello");
    }

    #[test]
    fn test_decode_lenient_drops_lone_trailing_symbol() {
        // "aaaa" decodes to three bytes; the fifth symbol has nowhere to go.
        assert_eq!(decode_lenient(b"aaaaB"), decode_lenient(b"aaaa"));
        assert_eq!(decode_lenient(b"aaaaB").len(), 3);
    }

    #[test]
    fn test_decode_lenient_never_fails() {
        assert_eq!(decode_lenient(b""), Vec::<u8>::new());
        assert_eq!(decode_lenient(b"!!!"), Vec::<u8>::new());
        // Arbitrary binary input still produces a decode of its alphabet bytes.
        let _ = decode_lenient(&[0u8, 255, 128, b'Q', b'Q']);
    }

    #[test]
    fn test_is_data_url_accepts() {
        assert!(is_data_url("data:image/png;base64,aGVsbG8="));
        assert!(is_data_url("data:image/svg+xml;charset=utf-8;base64,PHN2Zz4="));
        assert!(is_data_url("DATA:IMAGE/PNG;BASE64,QUJDRA=="));
        // Every prefix component is optional; only the comma is mandatory.
        assert!(is_data_url(",aGVsbG8="));
        assert!(is_data_url("  data:image/jpeg;base64,/9j/4AAQ  "));
    }

    #[test]
    fn test_is_data_url_rejects() {
        assert!(!is_data_url("not a data url"));
        assert!(!is_data_url(""));
        assert!(!is_data_url("aGVsbG8="));
        assert!(!is_data_url("http://example.com/image.png"));
    }

    #[test]
    fn test_encoded_accessors() {
        let text = Encoded::Text("aGVsbG8=".to_string());
        assert_eq!(text.as_str(), Some("aGVsbG8="));
        assert_eq!(text.as_bytes(), None);

        let buffer = Encoded::Buffer(vec![1, 2, 3]);
        assert_eq!(buffer.as_str(), None);
        assert_eq!(buffer.as_bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_payload_from_impls() {
        assert_eq!(Payload::from(vec![1u8, 2]), Payload::Buffer(vec![1, 2]));
        assert_eq!(
            Payload::from("data:,abcd"),
            Payload::Text("data:,abcd".to_string())
        );
        assert_eq!(Payload::from("abcd").as_bytes(), b"abcd");
    }
}

//! Configuration for the encode and decode operations
//!
//! Options are plain structs with documented defaults, validated once at the
//! entry boundary rather than inspected ad hoc at each use site. Both structs
//! derive serde traits so callers can embed them in their own configuration.

use serde::{Deserialize, Serialize};

/// Line-wrapping setting for Base64 output.
///
/// Accepted for interface compatibility but never applied: the string form of
/// an encoded image is always produced without line breaks. `Columns` carries
/// the requested width anyway so callers round-tripping options through
/// serialization do not lose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Wrap {
    /// No wrapping requested (the default)
    #[default]
    Off,
    /// Wrapping requested at an unspecified width
    On,
    /// Wrapping requested at a specific column width
    Columns(usize),
}

/// Options for [`encode`](crate::encode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Return the result as a Base64 string rather than a byte buffer.
    /// Defaults to `false`. See [`Encoded`](crate::Encoded) for what the
    /// buffer form contains.
    pub as_string: bool,

    /// Treat the source as a local filesystem path rather than a remote URL.
    /// Defaults to `false`.
    pub local: bool,

    /// Requested line wrapping. Accepted but has no effect on the output.
    pub wrap: Wrap,
}

/// Options for [`decode`](crate::decode)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Base name (without extension) for the saved file. The file written is
    /// `{filename}.jpg` in the current working directory. Defaults to
    /// `"saved-image"`.
    pub filename: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            filename: "saved-image".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_defaults() {
        let options = EncodeOptions::default();
        assert!(!options.as_string);
        assert!(!options.local);
        assert_eq!(options.wrap, Wrap::Off);
    }

    #[test]
    fn test_decode_default_filename() {
        let options = DecodeOptions::default();
        assert_eq!(options.filename, "saved-image");
    }
}

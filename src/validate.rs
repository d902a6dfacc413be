//! Input-shape checks gating the encode and decode operations
//!
//! All checks run before any I/O is attempted, and their failures are
//! delivered through the same `Result` channel as I/O failures so the caller
//! sees a uniform interface.

use crate::codec::{self, Payload};
use crate::error::{Error, Result};

/// Require a usable source string for encode.
///
/// Applies uniformly to both remote and local sources: the flag selecting
/// between them is not consulted here.
pub fn check_source(source: &str) -> Result<()> {
    if source.trim().is_empty() {
        return Err(Error::InvalidInput(
            "image source must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Require a recognizable payload for decode.
///
/// Byte buffers are accepted unconditionally, whatever their content; a
/// string must match the data-URL grammar. The asymmetry is deliberate,
/// preserved from the interface this crate replaces.
pub fn check_payload(payload: &Payload) -> Result<()> {
    match payload {
        Payload::Buffer(_) => Ok(()),
        Payload::Text(text) => {
            if codec::is_data_url(text) {
                Ok(())
            } else {
                Err(Error::InvalidInput(
                    "string payload is not a Base64 data URL".to_string(),
                ))
            }
        }
    }
}

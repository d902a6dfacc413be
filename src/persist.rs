//! Writing decoded payloads to disk
//!
//! The persister takes a Base64 payload, decodes it, and writes the result to
//! `{base_name}.jpg`. The extension is always `.jpg` regardless of the actual
//! image format of the original data, a contract preserved from the interface
//! this crate replaces.

use log::debug;

use crate::codec;
use crate::error::Result;

/// Decode `payload` as Base64 text and write the bytes to `{base_name}.jpg`.
///
/// Returns a confirmation message naming the written file. Fails with
/// [`Error::Io`](crate::Error::Io) if the target cannot be created or
/// written, forwarding the underlying error unchanged.
pub async fn save(payload: &[u8], base_name: &str) -> Result<String> {
    let file_name = format!("{base_name}.jpg");
    let decoded = codec::decode_lenient(payload);
    tokio::fs::write(&file_name, &decoded).await?;
    debug!("wrote {} bytes to {}", decoded.len(), file_name);
    Ok(format!("Image saved as {file_name}"))
}

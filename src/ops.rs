//! The encode and decode entry points
//!
//! Each operation is a single linear validate, fetch-or-persist, transform
//! sequence with no intermediate state observable to the caller. The first
//! failure aborts the operation; there is no retry or recovery at any layer.

use std::path::PathBuf;

use crate::codec::{self, Encoded, Payload};
use crate::error::Result;
use crate::fetch::{self, ImageSource};
use crate::options::{DecodeOptions, EncodeOptions};
use crate::persist;
use crate::validate;

/// Fetch an image and transform it to a Base64 representation.
///
/// `source` is a remote URL or, with `options.local` set, a local filesystem
/// path; the flag alone decides which, the string is never inspected. With
/// `options.as_string` set the result is the standard Base64 text of the
/// fetched bytes; otherwise it is the [`Encoded::Buffer`] reinterpretation
/// (see the quirk documented there).
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> img64::Result<()> {
/// use img64::{encode, EncodeOptions};
///
/// let encoded = encode(
///     "https://example.com/logo.png",
///     EncodeOptions { as_string: true, ..Default::default() },
/// )
/// .await?;
/// println!("{}", encoded.as_str().unwrap());
/// # Ok(())
/// # }
/// ```
pub async fn encode(source: &str, options: EncodeOptions) -> Result<Encoded> {
    validate::check_source(source)?;

    let source = if options.local {
        ImageSource::Local(PathBuf::from(source))
    } else {
        ImageSource::Remote(source.to_string())
    };
    let bytes = fetch::fetch(&source).await?;

    // options.wrap is accepted but never applied; the string form is
    // produced without line breaks.
    if options.as_string {
        Ok(Encoded::Text(codec::encode_to_string(&bytes)))
    } else {
        Ok(Encoded::Buffer(codec::decode_lenient(&bytes)))
    }
}

/// Persist a Base64 payload to disk as `{options.filename}.jpg`.
///
/// Byte-buffer payloads are accepted unconditionally; string payloads must
/// match the data-URL grammar. The on-disk bytes are the Base64 decoding of
/// the payload content. On success the returned string is a human-readable
/// confirmation naming the written file.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> img64::Result<()> {
/// use img64::{decode, DecodeOptions};
///
/// let message = decode(
///     "data:image/jpeg;base64,/9j/4AAQSkZJRg==".into(),
///     DecodeOptions { filename: "restored".to_string() },
/// )
/// .await?;
/// println!("{message}");
/// # Ok(())
/// # }
/// ```
pub async fn decode(payload: Payload, options: DecodeOptions) -> Result<String> {
    validate::check_payload(&payload)?;
    persist::save(payload.as_bytes(), &options.filename).await
}

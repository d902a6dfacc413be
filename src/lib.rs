//! # img64: images as Base64, Base64 as images
//!
//! `img64` converts between image bytes and Base64 text, sourcing images from
//! a remote HTTP(S) location or the local filesystem and persisting decoded
//! Base64 data back to disk. It is a utility library for application code
//! that needs to embed images as text (inlining in JSON payloads or HTML) or
//! restore such text back into image files.
//!
//! ## Features
//!
//! - Asynchronous API on Tokio; each call is a single fetch plus a single transform
//! - Remote sources over HTTP(S) and local filesystem sources
//! - Data-URL classification for decode input
//! - Uniform error reporting through one `Result` channel
//!
//! Every call is stateless and self-contained: no caching, no retries, no
//! shared state between calls. The full resource is always materialized in
//! memory, so very large images are out of scope.
//!
//! ## Example
//!
//! ```no_run
//! use img64::{decode, encode, DecodeOptions, EncodeOptions};
//!
//! # async fn run() -> img64::Result<()> {
//! // Image bytes to Base64 text.
//! let encoded = encode(
//!     "https://example.com/logo.png",
//!     EncodeOptions { as_string: true, ..Default::default() },
//! )
//! .await?;
//!
//! // Base64 text back to an image file, written as restored.jpg.
//! let message = decode(
//!     format!("data:image/png;base64,{}", encoded.as_str().unwrap()).into(),
//!     DecodeOptions { filename: "restored".to_string() },
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod fetch;
pub mod options;
pub mod persist;
pub mod validate;

mod ops;

// Re-export commonly used types for convenience
pub use codec::{is_data_url, Encoded, Payload};
pub use error::{Error, Result};
pub use fetch::ImageSource;
pub use ops::{decode, encode};
pub use options::{DecodeOptions, EncodeOptions, Wrap};

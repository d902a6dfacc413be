//! Image byte retrieval
//!
//! This module fetches the raw bytes of an image from either a remote HTTP(S)
//! location or the local filesystem. A fetch is a single GET or a single file
//! read: no retries, no backoff, no redirect handling beyond what the
//! transport performs on its own, and no timeout configuration exposed here.

use std::path::PathBuf;

use bytes::Bytes;
use log::debug;
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Where the bytes of an image come from.
///
/// The variant is chosen by the caller's `local` flag, never by inspecting
/// the source string itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image fetched over HTTP(S)
    Remote(String),
    /// An image read from the local filesystem
    Local(PathBuf),
}

/// Retrieve the raw bytes of `source`, fully materialized in memory.
///
/// Remote fetches require the response to carry a body and to have status
/// exactly 200: redirects and non-200 success codes are failures, by strict
/// equality rather than a range check. Local reads forward the underlying
/// I/O error unchanged.
pub async fn fetch(source: &ImageSource) -> Result<Bytes> {
    match source {
        ImageSource::Local(path) => {
            debug!("reading image from {}", path.display());
            let data = tokio::fs::read(path).await?;
            Ok(Bytes::from(data))
        }
        ImageSource::Remote(url) => {
            debug!("fetching image from {}", url);
            let response = reqwest::get(url).await?;
            let status = response.status();
            let body = response.bytes().await?;
            // Body check first, then status, matching the contract's clause order.
            if body.is_empty() {
                return Err(Error::EmptyResponse(url.clone()));
            }
            if status != StatusCode::OK {
                return Err(Error::HttpStatus(status.as_u16()));
            }
            debug!("fetched {} bytes from {}", body.len(), url);
            Ok(body)
        }
    }
}

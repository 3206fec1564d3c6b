//! REST helpers for the video listing endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by a
//! `gloo-timers` timeout.
//! Server-side (SSR): the fetch is unavailable since it only runs after the
//! gallery mounts in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, status, body shape, timeout) is returned as
//! a `FetchError` so the gallery can show it instead of loading forever. The
//! one tolerated irregularity is a missing or `null` `data` field, which
//! decodes to an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{VideoListResponse, VideoRecord, check_listing_shape};

/// Listing endpoint served alongside the app.
pub const VIDEO_LIST_ENDPOINT: &str = "/api/mux/list";

/// Upper bound on how long the gallery waits for the listing.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Reasons a video list fetch can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("video list request failed: {0}")]
    Status(u16),

    /// The body was not JSON or did not match the listing schema.
    #[error("malformed video list: {0}")]
    Decode(String),

    /// No response arrived within the timeout.
    #[error("video list request timed out after {0}s")]
    Timeout(u64),

    /// Fetching is only possible in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Decode a listing response body into its records, preserving order.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not JSON or its shape does not
/// match `{ "data": [VideoRecord, ...] }`.
pub fn parse_video_list(body: &str) -> Result<Vec<VideoRecord>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    check_listing_shape(&value).map_err(FetchError::Decode)?;
    serde_json::from_value::<VideoListResponse>(value)
        .map(|response| response.data)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the video list from `/api/mux/list`.
///
/// # Errors
///
/// Returns an error on transport failure, non-OK status, undecodable body or
/// timeout; on the server it always returns `FetchError::Unavailable`.
pub async fn fetch_video_list() -> Result<Vec<VideoRecord>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = Box::pin(request_video_list());
        let timeout = Box::pin(gloo_timers::future::sleep(FETCH_TIMEOUT));
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::Timeout(FETCH_TIMEOUT.as_secs())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn request_video_list() -> Result<Vec<VideoRecord>, FetchError> {
    let resp = gloo_net::http::Request::get(VIDEO_LIST_ENDPOINT)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
    let videos = parse_video_list(&body)?;
    log::debug!("videos {videos:?}");
    Ok(videos)
}

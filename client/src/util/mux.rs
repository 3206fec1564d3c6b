//! URL conventions for the video host and the playback route.

#[cfg(test)]
#[path = "mux_test.rs"]
mod mux_test;

/// Base URL of the host's thumbnail image service.
pub const THUMBNAIL_BASE_URL: &str = "https://image.mux.com";

/// Frame offset, in seconds, used for gallery thumbnails.
pub const THUMBNAIL_TIME_SECS: u32 = 5;

/// Rendered thumbnail dimensions in pixels.
pub const THUMBNAIL_WIDTH: u32 = 500;
pub const THUMBNAIL_HEIGHT: u32 = 300;

/// Thumbnail image URL for a playback id.
pub fn thumbnail_url(playback_id: &str) -> String {
    format!("{THUMBNAIL_BASE_URL}/{playback_id}/thumbnail.jpg?time={THUMBNAIL_TIME_SECS}")
}

/// In-app route of the playback page for a playback id.
pub fn playback_route(playback_id: &str) -> String {
    format!("/play-video/{playback_id}")
}

//! Video list state and its render projection.
//!
//! DESIGN
//! ======
//! The loader's lifecycle is an explicit tagged state instead of being
//! inferred from collection length, so "still loading" and "failed" render
//! differently. `GalleryView::project` is the whole render contract; the
//! component only turns its output into markup.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

use crate::net::api::FetchError;
use crate::net::types::VideoRecord;
use crate::util::mount::MountScope;
use crate::util::mux;

/// Lifecycle of the one-shot video list load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoListState {
    /// Request issued (or about to be); nothing received yet.
    #[default]
    Loading,
    /// Response received; records in server order.
    Loaded(Vec<VideoRecord>),
    /// Request failed; carries a user-facing reason.
    Failed(String),
}

impl VideoListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Replace `Loading` with the fetch outcome.
    ///
    /// Returns `false` without changing anything when the scope has been
    /// released or the state has already settled.
    pub fn settle(&mut self, scope: &MountScope, result: Result<Vec<VideoRecord>, FetchError>) -> bool {
        if !scope.is_active() || !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(videos) => Self::Loaded(videos),
            Err(e) => Self::Failed(e.to_string()),
        };
        true
    }
}

/// Presentation data for one gallery tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoTileModel {
    /// Record id, used as the list key.
    pub key: String,
    pub href: String,
    pub thumbnail_src: String,
    pub caption: String,
}

impl VideoTileModel {
    /// Build a tile for a record, or `None` if it has no playback id.
    pub fn from_record(record: &VideoRecord) -> Option<Self> {
        let playback_id = record.first_playback_id()?;
        Some(Self {
            key: record.id.clone(),
            href: mux::playback_route(playback_id),
            thumbnail_src: mux::thumbnail_url(playback_id),
            caption: record.display_title().to_owned(),
        })
    }
}

/// What the gallery should draw for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryView {
    /// Skeleton row plus the wide block below it.
    Placeholder,
    /// Three-column grid; may hold zero tiles if no record was playable.
    Grid(Vec<VideoTileModel>),
    /// User-visible failure message.
    Error(String),
}

impl GalleryView {
    pub fn project(state: &VideoListState) -> Self {
        match state {
            VideoListState::Loading => Self::Placeholder,
            VideoListState::Loaded(videos) if videos.is_empty() => Self::Placeholder,
            VideoListState::Loaded(videos) => {
                Self::Grid(videos.iter().filter_map(VideoTileModel::from_record).collect())
            }
            VideoListState::Failed(reason) => Self::Error(reason.clone()),
        }
    }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery and its loading placeholders. Pages compose
//! them; only `video_gallery` owns network-backed state.

pub mod route_loading;
pub mod skeleton;
pub mod video_gallery;
pub mod video_tile;

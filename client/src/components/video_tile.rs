//! Clickable thumbnail tile linking to a video's playback page.

use leptos::prelude::*;

use crate::state::videos::VideoTileModel;
use crate::util::mux::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};

#[component]
pub fn VideoTile(tile: VideoTileModel) -> impl IntoView {
    let VideoTileModel { href, thumbnail_src, caption, .. } = tile;
    let alt = caption.clone();

    view! {
        <a class="video-tile" href=href>
            <img
                class="video-tile__thumb"
                src=thumbnail_src
                alt=alt
                width=THUMBNAIL_WIDTH.to_string()
                height=THUMBNAIL_HEIGHT.to_string()
                loading="lazy"
            />
            <h3 class="video-tile__caption">{caption}</h3>
        </a>
    }
}

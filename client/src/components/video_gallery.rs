//! Video gallery: loads the video list once per mount and renders it.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the gallery starts a single fetch of `/api/mux/list` in the
//! browser. Until it resolves (or when it resolves to no records) the
//! skeleton layout is shown; failures are surfaced as a message.
//!
//! DESIGN
//! ======
//! The fetch is tied to a `MountScope`: cleanup releases the scope and aborts
//! the request, and a result that still arrives is discarded by
//! `VideoListState::settle`. The request is spawned from the component body,
//! which runs once per mount; the render closure only reads state, so
//! re-renders never issue another request.

use leptos::prelude::*;

use crate::components::skeleton::GalleryPlaceholder;
use crate::components::video_tile::VideoTile;
use crate::state::videos::{GalleryView, VideoListState};
use crate::util::mount::MountScope;

const GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1.5rem;";

#[component]
pub fn VideoGallery() -> impl IntoView {
    let videos = RwSignal::new(VideoListState::default());
    let scope = MountScope::new();

    #[cfg(feature = "hydrate")]
    let abort = spawn_video_list_load(videos, scope.clone());

    on_cleanup(move || {
        scope.release();
        #[cfg(feature = "hydrate")]
        abort.abort();
    });

    view! {
        <section class="video-gallery">
            {move || match videos.with(GalleryView::project) {
                GalleryView::Placeholder => view! { <GalleryPlaceholder /> }.into_any(),
                GalleryView::Grid(tiles) => {
                    view! {
                        <div class="video-gallery__grid" style=GRID_STYLE>
                            <For
                                each=move || tiles.clone()
                                key=|tile| tile.key.clone()
                                children=move |tile| view! { <VideoTile tile=tile /> }
                            />
                        </div>
                    }
                        .into_any()
                }
                GalleryView::Error(reason) => {
                    view! {
                        <p class="video-gallery__error" role="alert">
                            "Could not load videos: "
                            {reason}
                        </p>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Spawn the one-shot list fetch and return the handle that cancels it.
#[cfg(feature = "hydrate")]
fn spawn_video_list_load(
    videos: RwSignal<VideoListState>,
    scope: MountScope,
) -> futures::future::AbortHandle {
    let (handle, registration) = futures::future::AbortHandle::new_pair();
    leptos::task::spawn_local(async move {
        let request = futures::future::Abortable::new(crate::net::api::fetch_video_list(), registration);
        let Ok(result) = request.await else {
            log::debug!("video list request aborted on unmount");
            return;
        };
        if let Err(e) = &result {
            log::error!("video list load failed: {e}");
        }
        let applied = videos
            .try_update(|state| state.settle(&scope, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded video list response for unmounted gallery");
        }
    });
    handle
}

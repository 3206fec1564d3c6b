//! Video section route.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::route_loading::RouteLoading;
use crate::components::skeleton::SkeletonConfig;
use crate::components::video_gallery::VideoGallery;

#[component]
pub fn VideosPage() -> impl IntoView {
    view! {
        <Title text="All videos" />
        <main class="videos-page">
            <RouteLoading placeholder=SkeletonConfig::video_page()>
                <VideoGallery />
            </RouteLoading>
        </main>
    }
}

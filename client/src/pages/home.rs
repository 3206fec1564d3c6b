//! Landing route listing every video.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::route_loading::RouteLoading;
use crate::components::skeleton::SkeletonConfig;
use crate::components::video_gallery::VideoGallery;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Videos" />
        <main class="home-page">
            <h1 class="home-page__title">"Videos"</h1>
            <RouteLoading placeholder=SkeletonConfig::listing()>
                <VideoGallery />
            </RouteLoading>
        </main>
    }
}

//! Route-level loading screen.
//!
//! Server-rendered HTML carries the route's skeleton; the real page content
//! replaces it once the route has mounted in the browser.

use leptos::prelude::*;

use crate::components::skeleton::{PlaceholderView, SkeletonConfig};

#[component]
pub fn RouteLoading(placeholder: SkeletonConfig, children: ChildrenFn) -> impl IntoView {
    let mounted = RwSignal::new(false);
    // Effects only run in the browser, after hydration.
    Effect::new(move || mounted.set(true));

    view! {
        <Show when=move || mounted.get() fallback=move || view! { <PlaceholderView config=placeholder /> }>
            {children()}
        </Show>
    }
}

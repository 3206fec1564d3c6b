//! Skeleton placeholders shown while content is unavailable.
//!
//! DESIGN
//! ======
//! Every loading screen is the same markup: a row of identical blocks. The
//! variants differ only in block count and size, so they are presets of one
//! `SkeletonConfig` rather than separate components.

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

use leptos::prelude::*;

/// One block dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    /// Fixed size in CSS pixels.
    Px(u32),
    /// Percentage of the containing row.
    Percent(u8),
    /// Equal share of the row with its siblings.
    Fill,
}

/// Width and height of every block in a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSize {
    pub width: Length,
    pub height: Length,
}

impl BlockSize {
    pub const fn px(width: u32, height: u32) -> Self {
        Self { width: Length::Px(width), height: Length::Px(height) }
    }

    /// Inline CSS for one block.
    pub fn style(self) -> String {
        let width = match self.width {
            Length::Px(px) => format!("width: {px}px;"),
            Length::Percent(pct) => format!("width: {pct}%;"),
            Length::Fill => "flex: 1 1 0;".to_owned(),
        };
        let height = match self.height {
            Length::Px(px) => format!("height: {px}px;"),
            Length::Percent(pct) => format!("height: {pct}%;"),
            Length::Fill => "align-self: stretch;".to_owned(),
        };
        format!("{width} {height}")
    }
}

/// Number, size and shape of placeholder blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkeletonConfig {
    pub count: usize,
    pub size: BlockSize,
    pub rounded: bool,
    /// Let blocks wrap onto further lines when the row is too narrow.
    pub wrap: bool,
}

impl SkeletonConfig {
    /// General listing page: four wide, short cards.
    pub const fn listing() -> Self {
        Self { count: 4, size: BlockSize::px(500, 200), rounded: true, wrap: true }
    }

    /// Video page: three tall cards in one row.
    pub const fn video_page() -> Self {
        Self { count: 3, size: BlockSize::px(500, 300), rounded: false, wrap: false }
    }

    /// Gallery placeholder row: three equal-width blocks.
    pub const fn gallery_row() -> Self {
        Self {
            count: 3,
            size: BlockSize { width: Length::Fill, height: Length::Px(250) },
            rounded: false,
            wrap: false,
        }
    }

    /// Full-width block under the gallery placeholder row.
    pub const fn gallery_tail() -> Self {
        Self {
            count: 1,
            size: BlockSize { width: Length::Percent(100), height: Length::Px(250) },
            rounded: false,
            wrap: false,
        }
    }

    fn row_style(self) -> &'static str {
        if self.wrap {
            "display: flex; flex-wrap: wrap; align-items: center; gap: 1.5rem;"
        } else {
            "display: flex; align-items: center; gap: 1.5rem;"
        }
    }
}

/// A single pulsing block.
#[component]
pub fn Skeleton(size: BlockSize, #[prop(optional)] rounded: bool) -> impl IntoView {
    view! { <div class="skeleton" class:skeleton--rounded=rounded style=size.style() aria-hidden="true"></div> }
}

/// A row of `config.count` skeleton blocks.
#[component]
pub fn PlaceholderView(config: SkeletonConfig) -> impl IntoView {
    view! {
        <div class="placeholder-view" style=config.row_style() aria-busy="true">
            {(0..config.count)
                .map(|_| view! { <Skeleton size=config.size rounded=config.rounded /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Empty-state layout of the video gallery.
#[component]
pub fn GalleryPlaceholder() -> impl IntoView {
    view! {
        <div class="video-gallery__placeholder">
            <PlaceholderView config=SkeletonConfig::gallery_row() />
            <PlaceholderView config=SkeletonConfig::gallery_tail() />
        </div>
    }
}

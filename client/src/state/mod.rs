//! Client-side state owned by gallery components.

pub mod videos;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its route loading skeleton and delegates the gallery itself
//! to `components`.

pub mod home;
pub mod videos;

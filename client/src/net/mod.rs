//! Networking modules for the video listing API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the listing request and `types` defines the wire schema it
//! is decoded against.

pub mod api;
pub mod types;

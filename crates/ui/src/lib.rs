//! Chat message avatars for GPUI chat views.
//!
//! Maps a message's author role to one of two avatar presentations and ships a
//! small preview shell that renders them inside a themed window.
#![deny(unsafe_code)]

/// Avatar preview window and shell actions.
pub mod app;
/// Bundled avatar assets layered over the gpui-component icon set.
pub mod assets;
/// Chat domain contracts and the avatar component.
pub mod chat;

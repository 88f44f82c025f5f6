//! # portfolio-ui
//!
//! Leptos + WASM single-page portfolio. Replaces the hand-written DOM script
//! with a Rust-native UI layer: theme toggling, mobile navigation,
//! scroll-driven effects, reveal animations, a typed-text loop, a simulated
//! contact-form submission, and project-detail modals.
//!
//! Behavior logic lives in pure modules under [`state`]; components apply
//! that state to the view; `web-sys` access is confined to [`util`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

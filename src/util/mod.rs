//! `web-sys` boundary helpers. Everything that touches the browser directly
//! lives here; failures degrade silently (a missing window, document, or
//! element disables the feature, it never aborts the page).

pub mod observe;
pub mod smooth_scroll;
pub mod theme;
pub mod viewport;

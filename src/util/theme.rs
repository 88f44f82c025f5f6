//! Theme persistence and application.
//!
//! Reads the user's preference from `localStorage` and mirrors it onto the
//! `data-theme` attribute of the `<html>` element so stylesheet rules can
//! key off it. Toggle writes back to `localStorage`. When storage is
//! unavailable the attribute still updates, the choice just isn't
//! remembered across reloads.

use crate::state::theme::Theme;

const STORAGE_KEY: &str = "theme";
const THEME_ATTR: &str = "data-theme";

/// Read the saved preference, if any. Absent or unreadable storage means
/// the stylesheet default applies.
pub fn load_preference() -> Option<Theme> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(Theme::parse(&value))
}

/// Mirror the theme onto `<html data-theme="...">`.
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}

fn persist(theme: Theme) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    else {
        log::warn!("localStorage unavailable; theme won't survive a reload");
        return;
    };
    if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
        log::warn!("failed to persist theme preference");
    }
}

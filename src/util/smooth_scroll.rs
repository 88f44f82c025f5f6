//! Smooth in-page scrolling with a fixed clearance for the sticky header.

/// Pixels reserved for the fixed header when scrolling to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Smoothly scroll to the element an in-page link points at.
///
/// A bare `"#"` is skipped and a fragment with no matching element is a
/// silent miss; the caller has already prevented default navigation.
pub fn scroll_to_fragment(href: &str) {
    if href == "#" {
        return;
    }
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(href.trim_start_matches('#')) else {
        return;
    };

    let element_top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    scroll_to(&window, element_top + page_y - HEADER_OFFSET_PX);
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        scroll_to(&window, 0.0);
    }
}

fn scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

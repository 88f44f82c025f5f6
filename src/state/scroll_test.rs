use super::*;

fn metrics(scroll_y: f64, scroll_height: f64, client_height: f64) -> PageMetrics {
    PageMetrics { scroll_y, scroll_height, client_height }
}

// =============================================================
// Header threshold
// =============================================================

#[test]
fn header_plain_below_threshold() {
    let ui = ScrollUi::compute(metrics(49.0, 3000.0, 800.0), &[]);
    assert!(!ui.header_scrolled);
}

#[test]
fn header_scrolled_at_and_past_threshold() {
    for y in [50.0, 51.0, 2000.0] {
        let ui = ScrollUi::compute(metrics(y, 3000.0, 800.0), &[]);
        assert!(ui.header_scrolled, "expected scrolled at y={y}");
    }
}

// =============================================================
// Back to top threshold
// =============================================================

#[test]
fn back_to_top_hidden_below_threshold() {
    let ui = ScrollUi::compute(metrics(499.0, 3000.0, 800.0), &[]);
    assert!(!ui.back_to_top_visible);
}

#[test]
fn back_to_top_visible_at_and_past_threshold() {
    for y in [500.0, 501.0, 2200.0] {
        let ui = ScrollUi::compute(metrics(y, 3000.0, 800.0), &[]);
        assert!(ui.back_to_top_visible, "expected visible at y={y}");
    }
}

// =============================================================
// Progress percentage
// =============================================================

#[test]
fn progress_zero_at_top() {
    assert_eq!(progress_percent(metrics(0.0, 3000.0, 800.0)), 0.0);
}

#[test]
fn progress_full_at_bottom() {
    assert_eq!(progress_percent(metrics(2200.0, 3000.0, 800.0)), 100.0);
}

#[test]
fn progress_halfway() {
    assert_eq!(progress_percent(metrics(1100.0, 3000.0, 800.0)), 50.0);
}

#[test]
fn progress_page_shorter_than_viewport_clamps_to_zero() {
    // Regression: scroll_height == client_height used to divide by zero.
    let value = progress_percent(metrics(0.0, 600.0, 800.0));
    assert!(value.is_finite());
    assert_eq!(value, 0.0);

    let value = progress_percent(metrics(10.0, 800.0, 800.0));
    assert!(value.is_finite());
    assert_eq!(value, 0.0);
}

#[test]
fn progress_overscroll_clamps_to_bounds() {
    // Rubber-band scrolling can report offsets outside the page.
    assert_eq!(progress_percent(metrics(-20.0, 3000.0, 800.0)), 0.0);
    assert_eq!(progress_percent(metrics(2500.0, 3000.0, 800.0)), 100.0);
}

// =============================================================
// Combined recomputation
// =============================================================

#[test]
fn compute_carries_active_section() {
    use crate::state::nav::SectionBounds;

    let sections = [
        SectionBounds { id: "home".to_owned(), top: 0.0, height: 300.0 },
        SectionBounds { id: "about".to_owned(), top: 300.0, height: 300.0 },
    ];
    let ui = ScrollUi::compute(metrics(320.0, 3000.0, 800.0), &sections);
    assert_eq!(ui.active_section.as_deref(), Some("about"));
}

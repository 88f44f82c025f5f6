#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::nav::{self, SectionBounds};

/// Scroll offset at which the header picks up its `scrolled` style.
pub const HEADER_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset at which the back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// Raw page measurements taken from the document on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Everything the scroll-reactive UI needs, recomputed per scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUi {
    pub header_scrolled: bool,
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

impl ScrollUi {
    pub fn compute(metrics: PageMetrics, sections: &[SectionBounds]) -> Self {
        Self {
            header_scrolled: metrics.scroll_y >= HEADER_THRESHOLD_PX,
            progress_percent: progress_percent(metrics),
            back_to_top_visible: metrics.scroll_y >= BACK_TO_TOP_THRESHOLD_PX,
            active_section: nav::active_section(sections, metrics.scroll_y)
                .map(str::to_owned),
        }
    }
}

/// Reading progress through the page as a percentage, clamped to 0-100.
///
/// A page shorter than the viewport has no scrollable distance; that yields
/// 0 rather than the non-finite value a bare division would produce.
pub fn progress_percent(metrics: PageMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

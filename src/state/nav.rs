#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip open/closed (the hamburger control).
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Close regardless of prior state (any nav link click). Idempotent.
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Icon glyph classes for the toggle control.
    pub fn icon_class(self) -> &'static str {
        if self.open { "fas fa-times" } else { "fas fa-bars" }
    }
}

/// Position of one `<section>` element, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the nav should highlight at the given scroll offset.
///
/// A section qualifies once the viewport has scrolled past its top, offset
/// by a third of its own height. When several qualify, the last one in
/// document order wins, so the scan keeps overwriting the candidate.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - section.height / 3.0 {
            current = Some(section.id.as_str());
        }
    }
    current
}

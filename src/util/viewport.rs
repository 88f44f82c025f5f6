//! Page measurement for the scroll-reactive UI.

use wasm_bindgen::JsCast;

use crate::state::nav::SectionBounds;
use crate::state::scroll::PageMetrics;

/// Current scroll offset and document extents.
pub fn page_metrics() -> Option<PageMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(PageMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

/// Bounds of every `<section>` element, in document order. Recollected on
/// each scroll event so layout changes are picked up.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section") else {
        return Vec::new();
    };

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let id = element.id();
        if id.is_empty() {
            continue;
        }
        sections.push(SectionBounds {
            id,
            top: f64::from(element.offset_top()),
            height: f64::from(element.client_height()),
        });
    }
    sections
}

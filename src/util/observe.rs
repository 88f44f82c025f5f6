//! One-shot `IntersectionObserver` wiring for scroll-triggered animations.
//!
//! Both observers are single-fire per element: the first qualifying
//! intersection runs the element's effect and unobserves it. Elements added
//! after startup are not observed.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::state::watch::WatchState;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const SKILL_BAR_THRESHOLD: f64 = 0.5;

/// Watch all `.reveal` elements; the first time one is at least 10% visible
/// (inside a trigger zone shrunk 50px at the bottom) it gains the `active`
/// class and is unwatched.
pub fn observe_reveal_elements() {
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    one_shot_observer(
        ".reveal",
        &options,
        |el| el.class_list().contains("active"),
        |el| {
            let _ = el.class_list().add_1("active");
        },
    );
}

/// Watch all `.progress` bars; the first time one is at least half visible
/// its inline width is set from its `data-width` target and it is unwatched.
pub fn observe_skill_bars() {
    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SKILL_BAR_THRESHOLD));

    one_shot_observer(
        ".progress",
        &options,
        |el| {
            el.dyn_ref::<web_sys::HtmlElement>()
                .and_then(|el| el.style().get_property_value("width").ok())
                .is_some_and(|width| !width.is_empty())
        },
        |el| {
            let Some(width) = el.get_attribute("data-width") else { return };
            if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("width", &width);
            }
        },
    );
}

/// Observe every element matching `selector`, firing `effect` at most once
/// per element and unobserving it afterwards.
fn one_shot_observer(
    selector: &str,
    options: &web_sys::IntersectionObserverInit,
    already_fired: impl Fn(&web_sys::Element) -> bool + 'static,
    effect: impl Fn(&web_sys::Element) + 'static,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    let Ok(nodes) = document.query_selector_all(selector) else { return };
    if nodes.length() == 0 {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let state = WatchState::from_fired(already_fired(&target));
                let (_, fire) = state.advance(entry.is_intersecting());
                if fire {
                    effect(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        options,
    ) else {
        return;
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&element);
        }
    }

    // The observer callback lives for the page lifetime.
    callback.forget();
}

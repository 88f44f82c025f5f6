//! Looping typed-text animation in the hero tagline.

use leptos::prelude::*;

use crate::state::typed::TypedState;

const PHRASES: &[&str] = &["Business Analytics", "Data Science", "Business Intelligence"];

/// Types, holds, and deletes each phrase in turn, forever. The cursor is a
/// styled element rather than a text glyph.
#[component]
pub fn TypedText() -> impl IntoView {
    let text = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        let mut state = TypedState::default();
        loop {
            let (next, delay) = state.step(PHRASES);
            text.set(next.visible_text(PHRASES));
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            state = next;
        }
    });

    view! {
        <span class="typed-wrap">
            <span id="typed-text" class="typed-text">{move || text.get()}</span>
            <span class="typed-cursor" aria-hidden="true"></span>
        </span>
    }
}

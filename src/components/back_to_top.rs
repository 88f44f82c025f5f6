//! Back-to-top control, visible once the page has scrolled past 500px.

use leptos::prelude::*;

use crate::state::scroll::ScrollUi;
use crate::util::smooth_scroll;

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll_ui = expect_context::<RwSignal<ScrollUi>>();

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:active=move || scroll_ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_| smooth_scroll::scroll_to_top()
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

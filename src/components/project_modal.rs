//! Project detail modal, populated from the static catalog.
//!
//! Three equivalent ways to dismiss: the dedicated close control, a click
//! on the backdrop outside the content, and the close button generated
//! inside the content. All are idempotent hides.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::state::projects::Project;

#[component]
pub fn ProjectModal() -> impl IntoView {
    let selection = expect_context::<RwSignal<Option<&'static Project>>>();

    let close = move |_| selection.set(None);

    // Only a click on the overlay itself counts as a backdrop dismissal;
    // clicks inside the content bubble up with a different target.
    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let target = ev.target().map(JsValue::from);
        let overlay = ev.current_target().map(JsValue::from);
        if target.is_some() && target == overlay {
            selection.set(None);
        }
    };

    view! {
        <div
            id="project-modal"
            class="modal"
            class:active=move || selection.get().is_some()
            on:click=on_backdrop
        >
            <button id="modal-close" class="modal__close" aria-label="Close dialog" on:click=close>
                <i class="fas fa-times"></i>
            </button>
            <div id="modal-content" class="modal__content">
                {move || {
                    selection.get().map(|project| {
                        view! {
                            <div class="modal-content-inner">
                                <h3>{project.title}</h3>
                                <div class="project-tags">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|&tag| view! { <span class="project-tag">{tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <p>{project.description}</p>
                                <button class="btn btn--outline" on:click=close>
                                    "Close"
                                </button>
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}

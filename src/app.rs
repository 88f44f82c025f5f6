//! Root application component: shared state contexts, the window scroll
//! listener, and page composition.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::back_to_top::BackToTop;
use crate::components::project_modal::ProjectModal;
use crate::components::site_header::SiteHeader;
use crate::pages::home::HomePage;
use crate::state::nav::MenuState;
use crate::state::projects::Project;
use crate::state::scroll::ScrollUi;
use crate::state::theme::Theme;
use crate::util;

/// Root application component.
///
/// Provides the shared signals every behavior owns a slice of: the persisted
/// theme, the mobile menu, the scroll-derived UI state, and the project
/// modal selection.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Saved theme preference is applied at startup; absent means the
    // stylesheet default stands.
    let theme = RwSignal::new(util::theme::load_preference());
    if let Some(saved) = theme.get_untracked() {
        util::theme::apply(saved);
    }

    let menu = RwSignal::new(MenuState::default());
    let scroll_ui = RwSignal::new(ScrollUi::default());
    let modal_project = RwSignal::new(None::<&'static Project>);

    provide_context(theme);
    provide_context(menu);
    provide_context(scroll_ui);
    provide_context(modal_project);

    // One window scroll listener drives all four scroll-reactive effects,
    // recomputed synchronously on every event.
    Effect::new(move || {
        let Some(window) = web_sys::window() else { return };

        let recompute = move || {
            if let Some(metrics) = util::viewport::page_metrics() {
                let sections = util::viewport::section_bounds();
                scroll_ui.set(ScrollUi::compute(metrics, &sections));
            }
        };
        // Initial pass so the UI is correct before the first scroll.
        recompute();

        let callback = Closure::<dyn FnMut()>::new(recompute);
        let _ = window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    });

    view! {
        <Title text="Maya Iyer | Business Analytics Portfolio"/>

        <SiteHeader/>
        <HomePage/>
        <ProjectModal/>
        <BackToTop/>
    }
}

/// Theme signal helper used by the header toggle: flips, applies, persists.
pub fn toggle_theme(theme: RwSignal<Option<Theme>>) {
    let current = theme.get_untracked().unwrap_or(Theme::Light);
    theme.set(Some(util::theme::toggle(current)));
}

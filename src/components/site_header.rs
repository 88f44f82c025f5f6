//! Sticky site header: logo, nav links with active highlighting, theme
//! toggle, mobile menu toggle, and the reading-progress bar.

use leptos::prelude::*;

use crate::app::toggle_theme;
use crate::state::nav::MenuState;
use crate::state::scroll::ScrollUi;
use crate::state::theme::Theme;
use crate::util::smooth_scroll;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let theme = expect_context::<RwSignal<Option<Theme>>>();
    let menu = expect_context::<RwSignal<MenuState>>();
    let scroll_ui = expect_context::<RwSignal<ScrollUi>>();

    let theme_icon = move || theme.get().unwrap_or(Theme::Light).icon_class();
    let progress_width = move || format!("{}%", scroll_ui.get().progress_percent);

    let on_logo = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu.update(|m| *m = m.closed());
        smooth_scroll::scroll_to_fragment("#home");
    };

    view! {
        <header id="header" class="site-header" class:scrolled=move || scroll_ui.get().header_scrolled>
            <div id="scroll-progress" class="scroll-progress" style:width=progress_width></div>
            <div class="site-header__inner">
                <a href="#home" class="site-header__logo" on:click=on_logo>
                    "Maya Iyer"
                </a>

                <nav id="nav-menu" class="nav-menu" class:active=move || menu.get().open>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| view! { <NavLink href=href label=label/> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="site-header__actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label="Toggle color theme"
                        on:click=move |_| toggle_theme(theme)
                    >
                        <i class=theme_icon></i>
                    </button>
                    <button
                        id="mobile-toggle"
                        class="mobile-toggle"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| menu.update(|m| *m = m.toggled())
                    >
                        <i class=move || menu.get().icon_class()></i>
                    </button>
                </div>
            </div>
        </header>
    }
}

/// One nav link: smooth-scrolls to its section, closes the mobile menu, and
/// carries `active` while its section is current.
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let scroll_ui = expect_context::<RwSignal<ScrollUi>>();

    let fragment = href.trim_start_matches('#');
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        menu.update(|m| *m = m.closed());
        smooth_scroll::scroll_to_fragment(href);
    };

    view! {
        <a
            href=href
            class="nav-link"
            class:active=move || scroll_ui.get().active_section.as_deref() == Some(fragment)
            on:click=on_click
        >
            {label}
        </a>
    }
}

//! The single portfolio page: hero, about, skills, projects, and contact
//! sections, plus the observer wiring for reveal and skill-bar animations.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::contact_form::ContactForm;
use crate::components::typed_text::TypedText;
use crate::state::projects::{self, PROJECTS, Project};
use crate::util;
use crate::util::smooth_scroll;

const SKILLS: &[(&str, &str)] = &[
    ("Excel & VBA", "95%"),
    ("SQL", "90%"),
    ("Power BI", "88%"),
    ("Tableau", "85%"),
    ("Python", "80%"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    // Observers attach once the section markup is in the DOM. Elements
    // added later are not observed.
    Effect::new(move || {
        util::observe::observe_reveal_elements();
        util::observe::observe_skill_bars();
    });

    view! {
        <main>
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <Contact/>
        </main>
        <footer class="site-footer">
            <p>"© 2026 Maya Iyer. Built with Rust and Leptos."</p>
        </footer>
    }
}

/// Intercepts an in-page link click and scrolls smoothly to its fragment.
fn on_anchor_click(ev: leptos::ev::MouseEvent) {
    ev.prevent_default();
    let href = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.get_attribute("href"));
    if let Some(href) = href {
        smooth_scroll::scroll_to_fragment(&href);
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__inner reveal">
                <p class="hero__eyebrow">"Hello, I'm"</p>
                <h1 class="hero__name">"Maya Iyer"</h1>
                <h2 class="hero__tagline">
                    "I work in " <TypedText/>
                </h2>
                <p class="hero__blurb">
                    "I turn messy business data into decisions — dashboards, "
                    "analyses, and the stories that make stakeholders act on them."
                </p>
                <div class="hero__actions">
                    <a href="#projects" class="btn btn--primary" on:click=on_anchor_click>
                        "View My Work"
                    </a>
                    <a href="#contact" class="btn btn--outline" on:click=on_anchor_click>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title reveal">"About Me"</h2>
            <div class="about__body reveal">
                <p>
                    "I'm a business analytics practitioner who likes the unglamorous "
                    "parts of the job: cleaning the data, questioning the metric, and "
                    "checking whether the chart actually answers the question someone "
                    "asked."
                </p>
                <p>
                    "Recent work spans profitability analysis for a telecom client, "
                    "sentiment dashboards over large text corpora, and executive "
                    "dashboards built around a structured client-questioning framework."
                </p>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <h2 class="section-title reveal">"Skills"</h2>
            <div class="skills__list">
                {SKILLS
                    .iter()
                    .map(|&(label, width)| {
                        view! {
                            <div class="skill reveal">
                                <div class="skill__label">
                                    <span>{label}</span>
                                    <span>{width}</span>
                                </div>
                                <div class="skill__track">
                                    // Width animates in from data-width when the bar
                                    // becomes visible.
                                    <div class="progress" data-width=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let selection = expect_context::<RwSignal<Option<&'static Project>>>();

    let on_view = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let id = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-project"));
        let Some(id) = id else { return };
        // Unknown identifiers are a silent no-op.
        if let Some(project) = projects::find(&id) {
            selection.set(Some(project));
        }
    };

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title reveal">"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card reveal">
                                <h3 class="project-card__title">{project.title}</h3>
                                <div class="project-tags">
                                    {project
                                        .tags
                                        .iter()
                                        .take(2)
                                        .map(|&tag| view! { <span class="project-tag">{tag}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <button
                                    class="view-project-btn btn btn--primary"
                                    data-project=project.id
                                    on:click=on_view
                                >
                                    "View Project"
                                </button>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2 class="section-title reveal">"Get In Touch"</h2>
            <p class="contact__lead reveal">
                "Have a dataset that isn't telling you anything? Let's talk."
            </p>
            <div class="contact__form-wrap reveal">
                <ContactForm/>
            </div>
        </section>
    }
}

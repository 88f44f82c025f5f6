//! Contact form with a visual-only submission simulator.
//!
//! Submission never hits the network. The button walks
//! `Idle -> Sending -> Sent -> Idle` on fixed delays, clearing the fields
//! when the success state shows. A pending simulation is never cancelled.

use leptos::prelude::*;

use crate::state::contact::{RESET_DELAY_MS, SEND_LATENCY_MS, SubmitPhase};

#[component]
pub fn ContactForm() -> impl IntoView {
    let phase = RwSignal::new(SubmitPhase::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != SubmitPhase::Idle {
            return;
        }

        phase.set(SubmitPhase::Sending);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SEND_LATENCY_MS)).await;
            phase.set(SubmitPhase::Sent);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());

            gloo_timers::future::sleep(std::time::Duration::from_millis(RESET_DELAY_MS)).await;
            phase.set(SubmitPhase::Idle);
        });
    };

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit>
            <input
                class="contact-form__field"
                type="text"
                name="name"
                placeholder="Your Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="contact-form__field"
                type="email"
                name="email"
                placeholder="Your Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="contact-form__field contact-form__message"
                name="message"
                rows="5"
                placeholder="Your Message"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>

            <button
                type="submit"
                class=move || phase.get().button_class()
                disabled=move || phase.get().is_disabled()
            >
                {move || phase.get().label()}
                " "
                <i class=move || phase.get().icon_class()></i>
            </button>
        </form>
    }
}

//! Contact form submission stub. Nothing leaves the browser: the submit
//! handler waits, logs the payload and shows a success state.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const FAKE_SUBMIT_MS: u32 = 1_500;
const SUCCESS_RESET_MS: u32 = 3_000;

#[derive(Clone, Default, PartialEq)]
struct ContactFields {
    name: String,
    email: String,
    company: String,
    message: String,
}

#[derive(Clone, Copy, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let submit_state = use_state(|| SubmitState::Idle);

    let edit_input = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut updated = (*fields).clone();
            apply(&mut updated, input.value());
            fields.set(updated);
        })
    };

    let edit_message = {
        let fields = fields.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            let mut updated = (*fields).clone();
            updated.message = input.value();
            fields.set(updated);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submit_state != SubmitState::Idle {
                return;
            }
            submit_state.set(SubmitState::Sending);

            let fields = fields.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                TimeoutFuture::new(FAKE_SUBMIT_MS).await;
                log::info!(
                    "contact form submitted: {} <{}>",
                    fields.name,
                    fields.email
                );
                submit_state.set(SubmitState::Sent);

                TimeoutFuture::new(SUCCESS_RESET_MS).await;
                fields.set(ContactFields::default());
                submit_state.set(SubmitState::Idle);
            });
        })
    };

    let button_label = match *submit_state {
        SubmitState::Idle => "Send Message",
        SubmitState::Sending => "Sending...",
        SubmitState::Sent => "Message Sent!",
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="field-row">
                <div class="field">
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        type="text"
                        required=true
                        placeholder="Your name"
                        value={fields.name.clone()}
                        oninput={edit_input(|f, v| f.name = v)}
                    />
                </div>
                <div class="field">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        placeholder="your.email@example.com"
                        value={fields.email.clone()}
                        oninput={edit_input(|f, v| f.email = v)}
                    />
                </div>
            </div>

            <div class="field">
                <label for="company">{"Company / Organization"}</label>
                <input
                    id="company"
                    type="text"
                    placeholder="Your company or organization"
                    value={fields.company.clone()}
                    oninput={edit_input(|f, v| f.company = v)}
                />
            </div>

            <div class="field">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    required=true
                    placeholder="Tell us about your project and requirements"
                    value={fields.message.clone()}
                    oninput={edit_message}
                />
            </div>

            <button
                type="submit"
                class="button wide"
                disabled={*submit_state != SubmitState::Idle}
            >
                { button_label }
            </button>
        </form>
    }
}

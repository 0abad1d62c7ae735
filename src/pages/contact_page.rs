use crate::config;
use crate::forms::{validate, ContactForm, FormErrors};
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

/// Simulated round-trip latency for the stubbed submission transport.
const SUBMIT_LATENCY_MS: u32 = 2_000;

#[derive(Clone, Copy, PartialEq)]
enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

/// Contact page: animated header, contact info column, and the validated
/// form. Validation runs on submit; editing a field clears its error
/// immediately. Submission is simulated and cannot fail.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FormErrors::default);
    let is_submitting = use_state(|| false);
    let is_submitted = use_state(|| false);

    let on_field_input = |field: FieldName| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                FieldName::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            let mut next_errors = (*errors).clone();
            match field {
                FieldName::Name => {
                    next.name = value;
                    next_errors.name = None;
                }
                FieldName::Email => {
                    next.email = value;
                    next_errors.email = None;
                }
                FieldName::Subject => {
                    next.subject = value;
                    next_errors.subject = None;
                }
                FieldName::Message => {
                    next.message = value;
                    next_errors.message = None;
                }
            }
            form.set(next);
            errors.set(next_errors);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_submitting {
                return;
            }
            let found = validate(&form);
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            is_submitting.set(true);
            let payload = (*form).clone();
            match serde_json::to_string(&payload) {
                Ok(body) => info!("Submitting contact form: {body}"),
                Err(err) => info!("Submitting contact form (unserializable: {err})"),
            }

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let is_submitted = is_submitted.clone();
            spawn_local(async move {
                // Stand-in for the real transport.
                TimeoutFuture::new(SUBMIT_LATENCY_MS).await;
                is_submitted.set(true);
                form.set(ContactForm::default());
                is_submitting.set(false);
            });
        })
    };

    let on_reset = {
        let is_submitted = is_submitted.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            is_submitted.set(false);
            errors.set(FormErrors::default());
        })
    };

    if *is_submitted {
        return html! {
            <div class="success-screen">
                <div class="success-card">
                    <div class="success-icon">{"✔"}</div>
                    <h2>{"Thank You!"}</h2>
                    <p>{"Your message has been sent successfully. We'll get back to you soon!"}</p>
                    <button class="button-primary" onclick={on_reset}>
                        {"Send Another Message"}
                    </button>
                </div>
            </div>
        };
    }

    let field_class = |error: &Option<String>| classes!(error.is_some().then_some("invalid"));
    let field_error = |error: &Option<String>| match error {
        Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
        None => html! {},
    };

    html! {
        <div>
            <div class="contact-hero">
                <div class="floating-shape" style="top: 5rem; left: 2.5rem; width: 5rem; height: 5rem;" />
                <div class="floating-shape" style="top: 10rem; right: 5rem; width: 8rem; height: 8rem; animation-delay: -2s;" />
                <div class="floating-shape" style="bottom: 5rem; left: 25%; width: 6rem; height: 6rem; animation-delay: -4s;" />
                <h1>{"Get in Touch"}</h1>
                <p>
                    {"Have a question or want to work together? We'd love to hear from you. \
                      Send us a message and we'll respond as soon as possible."}
                </p>
            </div>

            <div class="section">
                <div class="section-inner contact-grid">
                    <div class="form-panel">
                        <h2>{"Contact Information"}</h2>
                        <div class="contact-card-row">
                            <div class="contact-card-icon">{"✉"}</div>
                            <div>
                                <h4>{"Email"}</h4>
                                <p>{ config::OFFICE_EMAIL }</p>
                            </div>
                        </div>
                        <div class="contact-card-row">
                            <div class="contact-card-icon">{"📞"}</div>
                            <div>
                                <h4>{"Phone"}</h4>
                                <p>{ config::OFFICE_PHONE }</p>
                            </div>
                        </div>
                        <div class="contact-card-row">
                            <div class="contact-card-icon">{"📍"}</div>
                            <div>
                                <h4>{"Address"}</h4>
                                <p>{ config::OFFICE_ADDRESS }<br />{ config::OFFICE_COUNTRY }</p>
                            </div>
                        </div>

                        <h4>{"Find Us"}</h4>
                        <div class="map-frame">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            />
                        </div>
                    </div>

                    <div class="form-panel">
                        <h2>{"Send us a Message"}</h2>

                        <div class="form-field">
                            <label for="name">{"Full Name *"}</label>
                            <input
                                type="text"
                                id="name"
                                value={form.name.clone()}
                                oninput={on_field_input(FieldName::Name)}
                                class={field_class(&errors.name)}
                                placeholder="Your full name"
                            />
                            { field_error(&errors.name) }
                        </div>

                        <div class="form-field">
                            <label for="email">{"Email Address *"}</label>
                            <input
                                type="email"
                                id="email"
                                value={form.email.clone()}
                                oninput={on_field_input(FieldName::Email)}
                                class={field_class(&errors.email)}
                                placeholder="your.email@example.com"
                            />
                            { field_error(&errors.email) }
                        </div>

                        <div class="form-field">
                            <label for="subject">{"Subject *"}</label>
                            <input
                                type="text"
                                id="subject"
                                value={form.subject.clone()}
                                oninput={on_field_input(FieldName::Subject)}
                                class={field_class(&errors.subject)}
                                placeholder="What's this about?"
                            />
                            { field_error(&errors.subject) }
                        </div>

                        <div class="form-field">
                            <label for="message">{"Message *"}</label>
                            <textarea
                                id="message"
                                rows="5"
                                value={form.message.clone()}
                                oninput={on_field_input(FieldName::Message)}
                                class={field_class(&errors.message)}
                                placeholder="Tell us more about your inquiry..."
                            />
                            { field_error(&errors.message) }
                        </div>

                        <button
                            type="submit"
                            class="submit-button"
                            disabled={*is_submitting}
                            onclick={on_submit}
                        >
                            if *is_submitting {
                                <span class="spinner" />
                                <span>{"Sending..."}</span>
                            } else {
                                <span>{"Send Message"}</span>
                            }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

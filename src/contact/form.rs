use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::validate::{validate, ContactFields, ContactRequest, FieldErrors, ServiceInterest};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let service_interest = use_state(String::new);

    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let success = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let service_interest = service_interest.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let success = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = ContactFields {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
                service_interest: (*service_interest).clone(),
            };

            let checked = validate(&fields);
            errors.set(checked);
            if !checked.is_empty() {
                return;
            }

            submitting.set(true);

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let subject = subject.clone();
            let message = message.clone();
            let service_interest = service_interest.clone();
            let submitting = submitting.clone();
            let success = success.clone();

            wasm_bindgen_futures::spawn_local(async move {
                // No backend yet; this is where the POST would go.
                let request = ContactRequest::from(&fields);
                if let Ok(payload) = serde_json::to_string(&request) {
                    log!("Simulated contact submission:", payload);
                }
                gloo_timers::future::TimeoutFuture::new(config::submit_latency_ms()).await;

                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                service_interest.set(String::new());
                submitting.set(false);
                success.set(true);

                gloo_timers::future::TimeoutFuture::new(config::SUCCESS_BANNER_MS).await;
                success.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            {
                if *success {
                    html! {
                        <div class="form-success">
                            {"Thank you for your message! We'll get back to you shortly."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-grid">
                <div class="form-field">
                    <label for="name">{"Your Name "}<span class="required">{"*"}</span></label>
                    <input
                        type="text"
                        id="name"
                        placeholder="John Doe"
                        value={(*name).clone()}
                        class={classes!(errors.name.map(|_| "invalid"))}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                    {
                        if let Some(msg) = errors.name {
                            html! { <p class="field-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="form-field">
                    <label for="email">{"Email Address "}<span class="required">{"*"}</span></label>
                    <input
                        type="email"
                        id="email"
                        placeholder="your.email@example.com"
                        value={(*email).clone()}
                        class={classes!(errors.email.map(|_| "invalid"))}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    {
                        if let Some(msg) = errors.email {
                            html! { <p class="field-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="form-field">
                    <label for="phone">{"Phone Number (Optional)"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder={config::CONTACT_PHONE}
                        value={(*phone).clone()}
                        onchange={let phone = phone.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        }}
                    />
                </div>
                <div class="form-field">
                    <label for="services">{"Interested Service"}</label>
                    <select
                        id="services"
                        value={(*service_interest).clone()}
                        onchange={let service_interest = service_interest.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            service_interest.set(select.value());
                        }}
                    >
                        <option value="" selected={service_interest.is_empty()}>{"Select a service"}</option>
                        {
                            for ServiceInterest::ALL.into_iter().map(|interest| html! {
                                <option
                                    value={interest.wire_name()}
                                    selected={*service_interest == interest.wire_name()}
                                >
                                    {interest.label()}
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="form-field form-field-wide">
                    <label for="subject">{"Subject "}<span class="required">{"*"}</span></label>
                    <input
                        type="text"
                        id="subject"
                        placeholder="How can we help you?"
                        value={(*subject).clone()}
                        class={classes!(errors.subject.map(|_| "invalid"))}
                        onchange={let subject = subject.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            subject.set(input.value());
                        }}
                    />
                    {
                        if let Some(msg) = errors.subject {
                            html! { <p class="field-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="form-field form-field-wide">
                    <label for="message">{"Message "}<span class="required">{"*"}</span></label>
                    <textarea
                        id="message"
                        rows="5"
                        placeholder="Let us know how we can help you..."
                        value={(*message).clone()}
                        class={classes!(errors.message.map(|_| "invalid"))}
                        onchange={let message = message.clone(); move |e: Event| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(area.value());
                        }}
                    />
                    {
                        if let Some(msg) = errors.message {
                            html! { <p class="field-error">{msg}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <button type="submit" class="button button-primary submit-button" disabled={*submitting}>
                { if *submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

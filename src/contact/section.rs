use yew::prelude::*;

use crate::config;
use crate::contact::form::ContactForm;
use crate::effects::reveal::Reveal;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/anvitha-tech"),
    ("Twitter", "https://twitter.com/anvitha_tech"),
    ("LinkedIn", "https://linkedin.com/company/anvitha-tech"),
    ("Instagram", "https://instagram.com/anvitha_tech"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section class="section contact-section" id="contact">
            <Reveal class="section-heading">
                <span class="section-badge">{"Contact Us"}</span>
                <h2>{"Let's "}<span class="gradient-text">{"Work Together"}</span></h2>
                <p>
                    {"Have a question or want to work together? Fill out the form below, \
                      and we'll get back to you as soon as possible."}
                </p>
            </Reveal>
            <div class="contact-grid">
                <Reveal threshold={0.2} class="contact-form-panel">
                    <ContactForm />
                </Reveal>
                <Reveal threshold={0.2} class="contact-info-panel">
                    <div class="contact-info-card">
                        <div class="contact-info-item">
                            <span class="contact-info-icon">{"✉️"}</span>
                            <div>
                                <h3>{"Email"}</h3>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                                    {config::CONTACT_EMAIL}
                                </a>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <span class="contact-info-icon">{"📞"}</span>
                            <div>
                                <h3>{"Phone"}</h3>
                                <a href="tel:+1234567890">{config::CONTACT_PHONE}</a>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <span class="contact-info-icon">{"📍"}</span>
                            <div>
                                <h3>{"Location"}</h3>
                                <p>{config::OFFICE_ADDRESS}</p>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <span class="contact-info-icon">{"🕘"}</span>
                            <div>
                                <h3>{"Business Hours"}</h3>
                                <p>{config::OFFICE_HOURS}</p>
                            </div>
                        </div>
                        <div class="contact-socials">
                            <h3>{"Connect With Us"}</h3>
                            <div class="contact-social-links">
                                {
                                    for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                        <a
                                            href={*href}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label={*label}
                                        >
                                            {*label}
                                        </a>
                                    })
                                }
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

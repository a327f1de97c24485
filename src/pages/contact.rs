use yew::prelude::*;

use crate::components::footer::Footer;
use crate::contact::section::ContactSection;
use crate::data;
use crate::effects::parallax::{Direction, Parallax};
use crate::effects::reveal::Reveal;
use crate::state::Selection;

#[function_component(Contact)]
pub fn contact() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // One FAQ entry open at a time; clicking it again collapses it.
    let open_faq = use_state(Selection::<&'static str>::default);

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <Parallax direction={Direction::Up} intensity={0.3} class="page-hero-backdrop">
                    <div class="hero-blob hero-blob-left"></div>
                    <div class="hero-blob hero-blob-right"></div>
                </Parallax>
                <Reveal threshold={0.3} class="page-hero-copy stagger">
                    <span class="section-badge" style="transition-delay: 0ms;">{"Contact Us"}</span>
                    <h1 style="transition-delay: 100ms;">
                        {"Let's Build Something "}<span class="gradient-text">{"Great Together"}</span>
                    </h1>
                    <p style="transition-delay: 200ms;">
                        {"Have a project in mind or a question about our services? We'd love to hear \
                          from you."}
                    </p>
                </Reveal>
            </section>

            <ContactSection />

            <section class="section faq-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"FAQs"}</span>
                    <h2>{"Frequently Asked "}<span class="gradient-text">{"Questions"}</span></h2>
                    <p>
                        {"Find answers to common questions about our services, process, and working \
                          with us. If you don't see your question here, please contact us directly."}
                    </p>
                </Reveal>
                <Reveal threshold={0.1} class="faq-list">
                    {
                        for data::FAQS.iter().map(|entry| {
                            let open = open_faq.is_active(&entry.id);
                            let toggle = {
                                let open_faq = open_faq.clone();
                                let id = entry.id;
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    open_faq.set(open_faq.toggle(id));
                                })
                            };
                            html! {
                                <div class={classes!("faq-item", open.then_some("open"))} key={entry.id}>
                                    <button class="faq-question" onclick={toggle}>
                                        <span>{entry.question}</span>
                                        <span class="faq-toggle-icon">{ if open { "−" } else { "+" } }</span>
                                    </button>
                                    {
                                        if open {
                                            html! { <div class="faq-answer"><p>{entry.answer}</p></div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        })
                    }
                </Reveal>
            </section>

            <Footer />

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                    background: #1e293b;
                    border-radius: 1rem;
                    overflow: hidden;
                }

                .faq-item {
                    border-bottom: 1px solid #334155;
                }

                .faq-item:last-child {
                    border-bottom: none;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    background: none;
                    border: none;
                    color: #f1f5f9;
                    font-size: 1.05rem;
                    text-align: left;
                    padding: 1.3rem 1.5rem;
                    cursor: pointer;
                }

                .faq-toggle-icon {
                    color: #60a5fa;
                    font-size: 1.4rem;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.3rem;
                    color: #94a3b8;
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::tech_stack::TechStack;
use crate::contact::section::ContactSection;
use crate::data;
use crate::effects::parallax::{Direction, Parallax};
use crate::effects::reveal::Reveal;
use crate::state::{Filter, Selection};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
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

    let expanded = use_state(Selection::<&'static str>::default);
    let filter = use_state(Filter::<&'static str>::default);

    // An expanded card filtered out of view stays selected; it reopens when
    // its category is admitted again.
    let visible_services: Vec<&data::DetailedService> = data::DETAILED_SERVICES
        .iter()
        .filter(|service| filter.matches(&service.category))
        .collect();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <Parallax direction={Direction::Up} intensity={0.3} class="page-hero-backdrop">
                    <div class="hero-blob hero-blob-left"></div>
                    <div class="hero-blob hero-blob-right"></div>
                </Parallax>
                <Reveal threshold={0.3} class="page-hero-copy stagger">
                    <span class="section-badge" style="transition-delay: 0ms;">{"Our Services"}</span>
                    <h1 style="transition-delay: 100ms;">
                        {"Technology Solutions That "}<span class="gradient-text">{"Drive Growth"}</span>
                    </h1>
                    <p style="transition-delay: 200ms;">
                        {"We offer a comprehensive range of technology solutions designed to help \
                          businesses innovate, grow, and succeed in today's competitive landscape."}
                    </p>
                </Reveal>
            </section>

            <section class="section services-list-section">
                <Reveal class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Service Offerings"}</span></h2>
                    <p>
                        {"Click a card to see exactly what each engagement covers."}
                    </p>
                </Reveal>
                <div class="filter-bar">
                    {
                        for data::SERVICE_CATEGORIES.iter().map(|(tag, label)| {
                            let active = match *filter {
                                Filter::All => *tag == "all",
                                Filter::Only(current) => current == *tag,
                            };
                            let onclick = {
                                let filter = filter.clone();
                                let tag = *tag;
                                Callback::from(move |_: MouseEvent| {
                                    filter.set(if tag == "all" { Filter::All } else { Filter::Only(tag) });
                                })
                            };
                            html! {
                                <button
                                    class={classes!("filter-button", active.then_some("active"))}
                                    {onclick}
                                >
                                    {*label}
                                </button>
                            }
                        })
                    }
                </div>
                <div class="card-grid card-grid-four">
                    {
                        for visible_services.iter().map(|service| {
                            let open = expanded.is_active(&service.id);
                            let toggle = {
                                let expanded = expanded.clone();
                                let id = service.id;
                                Callback::from(move |_: MouseEvent| expanded.set(expanded.toggle(id)))
                            };
                            html! {
                                <div
                                    class={classes!("offer-card", open.then_some("open"))}
                                    key={service.id}
                                    onclick={toggle}
                                >
                                    <div class="offer-accent" style={format!("background: {};", service.accent)}></div>
                                    <div class="offer-body">
                                        <span class="service-icon">{service.icon}</span>
                                        <h3>{service.title}</h3>
                                        <p>{service.description}</p>
                                        <span class="offer-toggle">
                                            { if open { "Hide Details ▲" } else { "View Details ▼" } }
                                        </span>
                                        {
                                            if open {
                                                html! {
                                                    <div class="offer-features">
                                                        <h4>{"Key Features:"}</h4>
                                                        <ul>
                                                            {
                                                                for service.features.iter().map(|feature| html! {
                                                                    <li>{*feature}</li>
                                                                })
                                                            }
                                                        </ul>
                                                    </div>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section class="section process-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"Our Process"}</span>
                    <h2>{"How We "}<span class="gradient-text">{"Deliver Excellence"}</span></h2>
                    <p>
                        {"Our well-defined process ensures that we deliver high-quality solutions \
                          that meet your business objectives and exceed expectations."}
                    </p>
                </Reveal>
                <div class="process-track">
                    {
                        for data::PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <Reveal threshold={0.2}>
                                <div
                                    class={classes!("process-step", (i % 2 == 1).then_some("process-step-alt"))}
                                    style={format!("transition-delay: {}ms;", 60 * i)}
                                >
                                    <span class="process-number">{step.number}</span>
                                    <div>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <TechStack />

            <Parallax direction={Direction::Up} intensity={0.2}>
                <section class="cta-band">
                    <h2>{"Ready to Start Your Project?"}</h2>
                    <p>
                        {"Let's discuss how we can help bring your vision to life with our expertise \
                          in design and development."}
                    </p>
                    <div class="cta-actions">
                        <Link<Route> to={Route::Contact} classes="button button-light">
                            {"Get in Touch"}
                        </Link<Route>>
                        <Link<Route> to={Route::Portfolio} classes="button button-ghost">
                            {"See Our Work"}
                        </Link<Route>>
                    </div>
                </section>
            </Parallax>

            <ContactSection />
            <Footer />

            <style>
                {r#"
                .offer-card {
                    background: #1e293b;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: box-shadow 0.3s ease;
                }

                .offer-card:hover {
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.35);
                }

                .offer-card.open {
                    outline: 2px solid #3b82f6;
                }

                .offer-accent {
                    height: 0.4rem;
                }

                .offer-body {
                    padding: 1.5rem;
                }

                .offer-toggle {
                    color: #60a5fa;
                    font-size: 0.9rem;
                }

                .offer-features {
                    margin-top: 1rem;
                }

                .offer-features h4 {
                    margin-bottom: 0.5rem;
                }

                .offer-features li {
                    color: #94a3b8;
                    padding-left: 1.2rem;
                    position: relative;
                    margin-bottom: 0.3rem;
                }

                .offer-features li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #3b82f6;
                }

                .process-track {
                    max-width: 900px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    border-left: 1px solid #334155;
                    padding-left: 2rem;
                }

                .process-step {
                    display: flex;
                    gap: 1.2rem;
                    background: #1e293b;
                    border-radius: 1rem;
                    padding: 1.5rem;
                }

                .process-step-alt {
                    margin-left: 3rem;
                }

                .process-number {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.6rem;
                    background: rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }

                @media (max-width: 768px) {
                    .process-step-alt {
                        margin-left: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::data;
use crate::effects::parallax::{Direction, Parallax};
use crate::effects::reveal::Reveal;
use crate::Route;

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
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

    html! {
        <div class="case-studies-page">
            <section class="page-hero">
                <Parallax direction={Direction::Up} intensity={0.3} class="page-hero-backdrop">
                    <div class="hero-blob hero-blob-left"></div>
                    <div class="hero-blob hero-blob-right"></div>
                </Parallax>
                <Reveal threshold={0.3} class="page-hero-copy stagger">
                    <span class="section-badge" style="transition-delay: 0ms;">{"Case Studies"}</span>
                    <h1 style="transition-delay: 100ms;">
                        {"Our "}<span class="gradient-text">{"Success Stories"}</span>
                    </h1>
                    <p style="transition-delay: 200ms;">
                        {"Explore how we've helped businesses across various industries solve complex \
                          challenges and achieve outstanding results through innovative technology \
                          solutions."}
                    </p>
                </Reveal>
            </section>

            <section class="section studies-section">
                <div class="studies-list">
                    {
                        // Entrance here is one-shot so rows stay put on re-scroll.
                        for data::CASE_STUDIES.iter().enumerate().map(|(i, study)| html! {
                            <Reveal threshold={0.2} once={true}>
                                <div
                                    class={classes!("study-row", (i % 2 == 1).then_some("study-row-reverse"))}
                                    key={study.id}
                                >
                                    <div class="study-banner" style={format!("background: {};", study.gradient)}>
                                        {study.title}
                                    </div>
                                    <div class="study-content">
                                        <span class="section-badge">{study.industry}</span>
                                        <h2>{study.title}</h2>
                                        <p>{study.description}</p>
                                        <div class="study-block">
                                            <h3>{"Services"}</h3>
                                            <div class="study-tags">
                                                {
                                                    for study.services.iter().map(|service| html! {
                                                        <span class="study-tag">{*service}</span>
                                                    })
                                                }
                                            </div>
                                        </div>
                                        <div class="study-block">
                                            <h3>{"Results"}</h3>
                                            <ul class="study-results">
                                                {
                                                    for study.results.iter().map(|result| html! {
                                                        <li>{*result}</li>
                                                    })
                                                }
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <Parallax direction={Direction::Up} intensity={0.2}>
                <section class="cta-band">
                    <h2>{"Ready to Become Our Next Success Story?"}</h2>
                    <p>
                        {"Let's discuss your business challenges and how our technology solutions can \
                          help you achieve your goals."}
                    </p>
                    <div class="cta-actions">
                        <Link<Route> to={Route::Contact} classes="button button-light">
                            {"Start a Project"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="button button-ghost">
                            {"Explore Our Services"}
                        </Link<Route>>
                    </div>
                </section>
            </Parallax>

            <Footer />

            <style>
                {r#"
                .studies-list {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                }

                .study-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .study-row-reverse .study-banner {
                    order: 2;
                }

                .study-banner {
                    min-height: 300px;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 2rem;
                    color: #fff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    box-shadow: 0 20px 45px rgba(0, 0, 0, 0.3);
                }

                .study-content h2 {
                    margin: 1rem 0;
                }

                .study-block {
                    margin-top: 1.5rem;
                }

                .study-block h3 {
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.8rem;
                    color: #64748b;
                    margin-bottom: 0.6rem;
                }

                .study-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .study-tag {
                    background: #1e293b;
                    border-radius: 999px;
                    padding: 0.3rem 0.9rem;
                    font-size: 0.8rem;
                    color: #cbd5e1;
                }

                .study-results li {
                    padding-left: 1.5rem;
                    position: relative;
                    margin-bottom: 0.5rem;
                    color: #cbd5e1;
                }

                .study-results li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #22c55e;
                }

                @media (max-width: 900px) {
                    .study-row {
                        grid-template-columns: 1fr;
                    }

                    .study-row-reverse .study-banner {
                        order: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}

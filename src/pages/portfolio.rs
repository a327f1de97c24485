use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::data;
use crate::effects::parallax::{Direction, Parallax};
use crate::effects::reveal::Reveal;
use crate::effects::tilt::TiltCard;
use crate::state::Filter;
use crate::Route;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
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

    let filter = use_state(Filter::<&'static str>::default);

    html! {
        <div class="portfolio-page">
            <section class="page-hero">
                <Parallax direction={Direction::Up} intensity={0.3} class="page-hero-backdrop">
                    <div class="hero-blob hero-blob-left"></div>
                    <div class="hero-blob hero-blob-right"></div>
                </Parallax>
                <Reveal threshold={0.3} class="page-hero-copy stagger">
                    <span class="section-badge" style="transition-delay: 0ms;">{"Our Portfolio"}</span>
                    <h1 style="transition-delay: 100ms;">
                        {"Showcasing Our "}<span class="gradient-text">{"Creative Work"}</span>
                    </h1>
                    <p style="transition-delay: 200ms;">
                        {"Browse through our collection of projects that showcase our expertise in web \
                          development, mobile apps, UI/UX design, and cloud solutions."}
                    </p>
                </Reveal>
            </section>

            <section class="section featured-section">
                <Reveal class="section-heading section-heading-left">
                    <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                    <p>
                        {"These are some of our top projects that represent the quality and innovation \
                          we bring to every client engagement."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        for data::FEATURED_PROJECTS.iter().map(|project| html! {
                            <TiltCard rotation_intensity={10.0} class="featured-tilt" key={project.id}>
                                <div class="featured-card" style={format!("background: {};", project.gradient)}>
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <button class="button button-ghost">{"View Project"}</button>
                                </div>
                            </TiltCard>
                        })
                    }
                </div>
            </section>

            <section class="section gallery-section">
                <Reveal class="section-heading section-heading-left">
                    <h2>{"Project "}<span class="gradient-text">{"Gallery"}</span></h2>
                    <p>
                        {"Explore our diverse range of projects across different industries and \
                          technologies."}
                    </p>
                </Reveal>
                <div class="filter-bar filter-bar-left">
                    {
                        for data::PORTFOLIO_CATEGORIES.iter().map(|(tag, label)| {
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
                <Gallery filter={*filter} />
            </section>

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
                        <Link<Route> to={Route::Services} classes="button button-ghost">
                            {"View Services"}
                        </Link<Route>>
                    </div>
                </section>
            </Parallax>

            <Footer />

            <style>
                {r#"
                .featured-tilt {
                    height: 300px;
                }

                .featured-card {
                    height: 100%;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    color: #fff;
                }

                .featured-card p {
                    color: rgba(255, 255, 255, 0.85);
                    margin: 0.5rem 0 1rem;
                }

                .featured-card .button {
                    align-self: flex-start;
                }
                "#}
            </style>
        </div>
    }
}

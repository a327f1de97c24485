use yew::prelude::*;

use crate::components::footer::Footer;
use crate::contact::section::ContactSection;
use crate::data;
use crate::effects::parallax::{Direction, Parallax};
use crate::effects::reveal::Reveal;
use crate::state::{Filter, Selection};

#[function_component(About)]
pub fn about() -> Html {
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
    let selected = use_state(Selection::<&'static str>::default);

    // Switching the filter keeps the open bio; if its member is filtered out
    // the detail panel simply has nowhere to render until the filter admits
    // it again.
    let visible_members: Vec<&data::TeamMember> = data::TEAM
        .iter()
        .filter(|member| filter.matches(&member.department))
        .collect();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <Parallax direction={Direction::Up} intensity={0.3} class="page-hero-backdrop">
                    <div class="hero-blob hero-blob-left"></div>
                    <div class="hero-blob hero-blob-right"></div>
                </Parallax>
                <Reveal threshold={0.3} class="page-hero-copy stagger">
                    <span class="section-badge" style="transition-delay: 0ms;">{"About Us"}</span>
                    <h1 style="transition-delay: 100ms;">
                        {"The Team Behind "}<span class="gradient-text">{"Anvitha Technologies"}</span>
                    </h1>
                    <p style="transition-delay: 200ms;">
                        {"From humble beginnings to a global technology company, our journey has been \
                          defined by innovation, growth, and a relentless commitment to excellence."}
                    </p>
                </Reveal>
            </section>

            <section class="section story-section">
                <div class="story-grid">
                    <Reveal threshold={0.1} class="story-copy">
                        <span class="section-badge">{"Our Journey"}</span>
                        <h2>{"The "}<span class="gradient-text">{"Story"}</span>{" Behind Our Success"}</h2>
                        <p>
                            {"Founded in 2015 by a small team of tech enthusiasts with a big vision, \
                              Anvitha Technologies has grown into a leading technology partner for \
                              businesses around the world."}
                        </p>
                        <p>
                            {"Throughout our journey, we've stayed true to our core values and mission: \
                              to help businesses leverage technology to achieve their goals and transform \
                              their operations."}
                        </p>
                    </Reveal>
                    <Reveal threshold={0.1} class="timeline">
                        {
                            for data::MILESTONES.iter().enumerate().map(|(i, milestone)| html! {
                                <div class="timeline-entry" style={format!("transition-delay: {}ms;", 100 * i)}>
                                    <span class="timeline-year">{milestone.year}</span>
                                    <h3>{milestone.title}</h3>
                                    <p>{milestone.description}</p>
                                </div>
                            })
                        }
                    </Reveal>
                </div>
            </section>

            <section class="section values-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"Core Values"}</span>
                    <h2>{"The "}<span class="gradient-text">{"Principles"}</span>{" That Guide Us"}</h2>
                    <p>
                        {"Our values form the foundation of our company culture and guide our decisions, \
                          actions, and interactions with clients and each other."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        for data::VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal threshold={0.1}>
                                <div class="value-card" style={format!("transition-delay: {}ms;", 80 * i)}>
                                    <span
                                        class="value-icon"
                                        style={format!("background: {};", value.accent)}
                                    >
                                        {value.icon}
                                    </span>
                                    <div>
                                        <h3>{value.title}</h3>
                                        <p>{value.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
                <Reveal class="mission-line">
                    <p>
                        <strong>{"Our Mission: "}</strong>
                        {"To empower businesses with innovative technology solutions that drive growth, \
                          efficiency, and success in the digital age."}
                    </p>
                </Reveal>
            </section>

            <section class="section team-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"Our Team"}</span>
                    <h2>{"Meet the "}<span class="gradient-text">{"People"}</span>{" Behind Our Success"}</h2>
                    <p>
                        {"Our talented team of experts is dedicated to delivering innovative solutions \
                          and exceptional results for our clients."}
                    </p>
                </Reveal>
                <div class="filter-bar">
                    {
                        for data::TEAM_DEPARTMENTS.iter().map(|(tag, label)| {
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
                        for visible_members.iter().map(|member| {
                            let open = selected.is_active(&member.id);
                            let toggle = {
                                let selected = selected.clone();
                                let id = member.id;
                                Callback::from(move |_: MouseEvent| selected.set(selected.toggle(id)))
                            };
                            html! {
                                <div class="team-card" key={member.id} onclick={toggle}>
                                    <div class="team-banner" style={format!("background: {};", member.gradient)}>
                                        {data::initials(member.name)}
                                    </div>
                                    <div class="team-body">
                                        <h3>{member.name}</h3>
                                        <p class="team-position">{member.position}</p>
                                        {
                                            if open {
                                                html! {
                                                    <div class="team-detail">
                                                        <p>{member.bio}</p>
                                                        <div class="team-socials">
                                                            {
                                                                if let Some(href) = member.linkedin {
                                                                    html! { <a href={href} target="_blank" rel="noopener noreferrer" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>{"LinkedIn"}</a> }
                                                                } else {
                                                                    html! {}
                                                                }
                                                            }
                                                            {
                                                                if let Some(href) = member.twitter {
                                                                    html! { <a href={href} target="_blank" rel="noopener noreferrer" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>{"Twitter"}</a> }
                                                                } else {
                                                                    html! {}
                                                                }
                                                            }
                                                            {
                                                                if let Some(address) = member.email {
                                                                    html! { <a href={format!("mailto:{address}")} onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>{"Email"}</a> }
                                                                } else {
                                                                    html! {}
                                                                }
                                                            }
                                                        </div>
                                                    </div>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                        <span class="team-toggle">
                                            { if open { "Hide Details ▲" } else { "View Details ▼" } }
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <ContactSection />
            <Footer />

            <style>
                {r#"
                .story-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .timeline {
                    border-left: 1px solid #334155;
                    padding-left: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .timeline-entry {
                    position: relative;
                }

                .timeline-year {
                    position: absolute;
                    left: -3.2rem;
                    top: 0;
                    width: 2.4rem;
                    height: 2.4rem;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                    font-size: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .value-card {
                    display: flex;
                    gap: 1rem;
                    background: #1e293b;
                    border-radius: 1rem;
                    padding: 1.5rem;
                }

                .value-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    flex-shrink: 0;
                }

                .mission-line {
                    text-align: center;
                    margin-top: 3rem;
                    color: #94a3b8;
                }

                .team-card {
                    background: #1e293b;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: box-shadow 0.3s ease;
                }

                .team-card:hover {
                    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.35);
                }

                .team-banner {
                    height: 10rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.6rem;
                    font-weight: 700;
                }

                .team-body {
                    padding: 1.5rem;
                }

                .team-position {
                    color: #60a5fa;
                    margin-bottom: 0.8rem;
                }

                .team-detail p {
                    color: #94a3b8;
                    margin-bottom: 1rem;
                }

                .team-socials {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .team-socials a {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }

                .team-socials a:hover {
                    color: #60a5fa;
                }

                .team-toggle {
                    color: #60a5fa;
                    font-size: 0.9rem;
                }

                @media (max-width: 900px) {
                    .story-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::data;
use crate::effects::reveal::Reveal;

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    html! {
        <section class="section tech-stack-section">
            <Reveal class="section-heading">
                <span class="section-badge">{"Our Technology Stack"}</span>
                <h2>{"Cutting-Edge "}<span class="gradient-text">{"Technologies"}</span>{" We Use"}</h2>
                <p>
                    {"We stay up-to-date with the latest technologies to deliver \
                      high-performance, scalable, and future-proof solutions for our clients."}
                </p>
            </Reveal>
            {
                for data::TECH_STACK.iter().map(|category| html! {
                    <Reveal threshold={0.1} class="tech-category">
                        <h3>{category.title}</h3>
                        <div class="tech-grid stagger">
                            {
                                for category.items.iter().enumerate().map(|(i, item)| html! {
                                    <div
                                        class="tech-chip"
                                        style={format!("transition-delay: {}ms;", 50 * i)}
                                    >
                                        {*item}
                                    </div>
                                })
                            }
                        </div>
                    </Reveal>
                })
            }
        </section>
    }
}

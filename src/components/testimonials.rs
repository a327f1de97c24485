use yew::prelude::*;

use crate::data;
use crate::effects::reveal::Reveal;
use crate::state::Carousel;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(data::TESTIMONIALS.len()));

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    let current = &data::TESTIMONIALS[carousel.index()];

    html! {
        <section class="section testimonials-section">
            <Reveal class="section-heading">
                <span class="section-badge">{"Testimonials"}</span>
                <h2>{"What Our "}<span class="gradient-text">{"Clients Say"}</span></h2>
                <p>
                    {"Read what our clients have to say about their experience working with us \
                      and the impact our solutions have had on their businesses."}
                </p>
            </Reveal>
            <Reveal threshold={0.2} class="testimonial-stage">
                <div class="testimonial-card" key={current.id}>
                    <div class="testimonial-mark">{"\u{201C}"}</div>
                    <p class="testimonial-quote">{current.quote}</p>
                    <div class="testimonial-author">
                        <div class="testimonial-avatar">{data::initials(current.author)}</div>
                        <div>
                            <h4>{current.author}</h4>
                            <p>{format!("{}, {}", current.position, current.company)}</p>
                        </div>
                    </div>
                </div>
                <button class="carousel-arrow carousel-arrow-left" onclick={on_prev} aria-label="Previous testimonial">
                    {"‹"}
                </button>
                <button class="carousel-arrow carousel-arrow-right" onclick={on_next} aria-label="Next testimonial">
                    {"›"}
                </button>
                <div class="carousel-dots">
                    {
                        for (0..carousel.len()).map(|i| {
                            let handle = carousel.clone();
                            let go = Callback::from(move |_: MouseEvent| handle.set(handle.go_to(i)));
                            html! {
                                <button
                                    class={classes!("carousel-dot", (i == carousel.index()).then_some("active"))}
                                    onclick={go}
                                    aria-label={format!("Go to testimonial {}", i + 1)}
                                />
                            }
                        })
                    }
                </div>
            </Reveal>
        </section>
    }
}

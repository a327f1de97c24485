use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::stats::StatCounter;
use crate::components::tech_stack::TechStack;
use crate::components::testimonials::Testimonials;
use crate::contact::section::ContactSection;
use crate::data;
use crate::effects::reveal::Reveal;
use crate::effects::tilt::TiltCard;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="home-page">
            <section class="hero">
                <div class="hero-blob hero-blob-left"></div>
                <div class="hero-blob hero-blob-right"></div>
                <div class="hero-content">
                    <Reveal threshold={0.3} class="hero-copy stagger">
                        <span class="section-badge" style="transition-delay: 0ms;">
                            {"Innovative Technology Solutions"}
                        </span>
                        <h1 style="transition-delay: 100ms;">
                            <span>{"Transforming Ideas into"}</span>
                            <span class="gradient-text">{" Digital Excellence"}</span>
                        </h1>
                        <p style="transition-delay: 200ms;">
                            {"We build cutting-edge digital products that help businesses thrive in the \
                              modern world. From web and mobile applications to AI solutions and cloud \
                              infrastructure, we deliver technology that drives real results."}
                        </p>
                        <div class="hero-actions" style="transition-delay: 300ms;">
                            <Link<Route> to={Route::Contact} classes="button button-primary">
                                {"Get Started"}
                            </Link<Route>>
                            <Link<Route> to={Route::Services} classes="button button-outline">
                                {"Our Services"}
                            </Link<Route>>
                        </div>
                        <div class="hero-clients" style="transition-delay: 400ms;">
                            <div class="hero-avatars">
                                { for (1..=4).map(|i| html! { <span class="hero-avatar">{format!("C{i}")}</span> }) }
                            </div>
                            <span><strong>{"100+"}</strong>{" happy clients worldwide"}</span>
                        </div>
                    </Reveal>
                    <Reveal threshold={0.3} class="hero-visual">
                        <div class="hero-card">
                            <div class="hero-mark">{"A"}</div>
                            <h3>{"Anvitha Technologies"}</h3>
                            <p>{"Innovative tech solutions that transform businesses"}</p>
                        </div>
                        <span class="hero-float hero-float-1">{"⚛️"}</span>
                        <span class="hero-float hero-float-2">{"📱"}</span>
                        <span class="hero-float hero-float-3">{"☁️"}</span>
                        <span class="hero-float hero-float-4">{"🤖"}</span>
                    </Reveal>
                </div>
                <div class="scroll-indicator">
                    <span></span>
                </div>
            </section>

            <section class="section about-section">
                <div class="about-grid">
                    <Reveal threshold={0.3} class="about-visual">
                        <div class="about-banner">{"About Anvitha Tech"}</div>
                    </Reveal>
                    <Reveal threshold={0.3} class="about-copy stagger">
                        <span class="section-badge" style="transition-delay: 0ms;">{"About Us"}</span>
                        <h2 style="transition-delay: 100ms;">
                            {"We Transform "}<span class="gradient-text">{"Ideas"}</span>
                            {" Into Impactful Digital Solutions"}
                        </h2>
                        <p style="transition-delay: 200ms;">
                            {"Founded in 2015, Anvitha Technologies has grown from a small tech startup to \
                              a leading digital transformation partner for businesses worldwide. Our mission \
                              is to empower organizations with innovative technology solutions that drive \
                              growth and efficiency."}
                        </p>
                        <p style="transition-delay: 300ms;">
                            {"We combine technical expertise with strategic thinking to deliver solutions \
                              that solve real business challenges. Our agile development approach ensures we \
                              deliver high-quality solutions on time and within budget."}
                        </p>
                        <div class="stats-grid" style="transition-delay: 400ms;">
                            {
                                for data::STATS.iter().map(|stat| html! {
                                    <StatCounter value={stat.value} suffix={stat.suffix} label={stat.label} />
                                })
                            }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section services-preview-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"Our Services"}</span>
                    <h2>{"Complete "}<span class="gradient-text">{"Tech Solutions"}</span>{" for Your Business"}</h2>
                    <p>
                        {"We offer a comprehensive range of services to help businesses digitize their \
                          operations, enhance customer experiences, and drive growth."}
                    </p>
                </Reveal>
                <div class="card-grid">
                    {
                        for data::SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <Reveal threshold={0.1}>
                                <div class="service-card" style={format!("transition-delay: {}ms;", 100 * i)}>
                                    <span class="service-icon">{service.icon}</span>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <Link<Route> to={Route::Services} classes="text-link">
                                        {"Learn more →"}
                                    </Link<Route>>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <TechStack />

            <section class="section case-preview-section">
                <Reveal class="section-heading section-heading-split">
                    <div>
                        <span class="section-badge">{"Case Studies"}</span>
                        <h2>{"Our "}<span class="gradient-text">{"Success Stories"}</span></h2>
                        <p>
                            {"Explore how we've helped businesses transform their digital presence \
                              and achieve tangible results."}
                        </p>
                    </div>
                    <Link<Route> to={Route::CaseStudies} classes="button button-primary">
                        {"View All Case Studies"}
                    </Link<Route>>
                </Reveal>
                <div class="card-grid">
                    {
                        for data::CASE_STUDY_PREVIEWS.iter().enumerate().map(|(i, study)| html! {
                            <Reveal threshold={0.1}>
                                <TiltCard rotation_intensity={8.0} glare={false}>
                                    <div class="case-card" style={format!("transition-delay: {}ms;", 100 * i)}>
                                        <div class="case-banner" style={format!("background: {};", study.gradient)}>
                                            {study.title}
                                        </div>
                                        <div class="case-body">
                                            <span class="case-category">{study.category}</span>
                                            <h3>{study.title}</h3>
                                            <p>{study.description}</p>
                                            <Link<Route> to={Route::CaseStudies} classes="text-link">
                                                {"View Case Study →"}
                                            </Link<Route>>
                                        </div>
                                    </div>
                                </TiltCard>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <Testimonials />
            <ContactSection />
            <Footer />

            <style>
                {r#"
                .hero {
                    position: relative;
                    padding: 10rem 2rem 6rem;
                    overflow: hidden;
                }

                .hero-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 3.2rem;
                    line-height: 1.15;
                    margin: 1.2rem 0;
                }

                .hero-blob {
                    position: absolute;
                    width: 20rem;
                    height: 20rem;
                    border-radius: 50%;
                    filter: blur(80px);
                    pointer-events: none;
                }

                .hero-blob-left {
                    top: 5rem;
                    left: 2rem;
                    background: rgba(59, 130, 246, 0.15);
                }

                .hero-blob-right {
                    bottom: 5rem;
                    right: 2rem;
                    background: rgba(168, 85, 247, 0.15);
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .hero-clients {
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                    margin-top: 3rem;
                    color: #94a3b8;
                }

                .hero-avatars {
                    display: flex;
                }

                .hero-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #1e293b;
                    border: 2px solid #0f172a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    margin-left: -0.5rem;
                }

                .hero-avatar:first-child {
                    margin-left: 0;
                }

                .hero-visual {
                    position: relative;
                }

                .hero-card {
                    background: #1e293b;
                    border-radius: 1rem;
                    padding: 4rem 2rem;
                    text-align: center;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.3);
                }

                .hero-mark {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #3b82f6, #a855f7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    font-weight: 700;
                    color: #fff;
                    transform: rotate(12deg);
                    animation: float 4s ease-in-out infinite;
                }

                .hero-float {
                    position: absolute;
                    background: #1e293b;
                    border-radius: 0.8rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
                    padding: 0.9rem;
                    font-size: 1.4rem;
                    animation: float 4s ease-in-out infinite;
                }

                .hero-float-1 { top: -2rem; right: -1rem; }
                .hero-float-2 { bottom: -1.5rem; left: -1rem; animation-delay: 1s; }
                .hero-float-3 { top: 45%; left: -2.5rem; animation-delay: 2s; }
                .hero-float-4 { bottom: 4rem; right: -2rem; animation-delay: 3s; }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }

                .scroll-indicator {
                    display: flex;
                    justify-content: center;
                    margin-top: 4rem;
                }

                .scroll-indicator span {
                    width: 1.4rem;
                    height: 2.4rem;
                    border: 2px solid #334155;
                    border-radius: 999px;
                    position: relative;
                }

                .scroll-indicator span::after {
                    content: '';
                    position: absolute;
                    top: 0.4rem;
                    left: 50%;
                    width: 0.3rem;
                    height: 0.6rem;
                    margin-left: -0.15rem;
                    border-radius: 999px;
                    background: #60a5fa;
                    animation: float 2s ease-in-out infinite;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .about-banner {
                    aspect-ratio: 16 / 9;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #3b82f6, #9333ea);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                @media (max-width: 900px) {
                    .hero-content,
                    .about-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-copy h1 {
                        font-size: 2.4rem;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

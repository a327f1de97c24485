use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

struct FooterColumn {
    title: &'static str,
    links: &'static [(&'static str, Route)],
}

const PAGE_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Company",
        links: &[
            ("About", Route::About),
            ("Services", Route::Services),
            ("Portfolio", Route::Portfolio),
            ("Case Studies", Route::CaseStudies),
            ("Contact", Route::Contact),
        ],
    },
];

const SERVICE_LINKS: &[&str] = &[
    "Web Development",
    "Mobile Apps",
    "Cloud Solutions",
    "AI & ML",
    "UI/UX Design",
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/anvitha-tech"),
    ("Twitter", "https://twitter.com/anvitha_tech"),
    ("LinkedIn", "https://linkedin.com/company/anvitha-tech"),
    ("Instagram", "https://instagram.com/anvitha_tech"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <span class="footer-logo-accent">{"Anvitha"}</span>
                            <span>{" Tech"}</span>
                        </Link<Route>>
                        <p>
                            {"Transforming ideas into digital excellence. We build innovative solutions \
                              that help businesses thrive in the digital era."}
                        </p>
                        <div class="footer-contact">
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            <a href="tel:+1234567890">{config::CONTACT_PHONE}</a>
                            <span>{config::OFFICE_ADDRESS}</span>
                        </div>
                    </div>
                    {
                        for PAGE_COLUMNS.iter().map(|column| html! {
                            <div class="footer-column">
                                <h3>{column.title}</h3>
                                <ul>
                                    {
                                        for column.links.iter().map(|(label, route)| html! {
                                            <li>
                                                <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                                            </li>
                                        })
                                    }
                                </ul>
                            </div>
                        })
                    }
                    <div class="footer-column">
                        <h3>{"Services"}</h3>
                        <ul>
                            {
                                for SERVICE_LINKS.iter().map(|label| html! {
                                    <li>
                                        <Link<Route> to={Route::Services}>{*label}</Link<Route>>
                                    </li>
                                })
                            }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h3>{"Connect"}</h3>
                        <ul>
                            {
                                for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                    <li>
                                        <a href={*href} target="_blank" rel="noopener noreferrer">
                                            {*label}
                                        </a>
                                    </li>
                                })
                            }
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{format!("© {} Anvitha Technologies. All rights reserved.", year)}</span>
                </div>
            </div>
        </footer>
    }
}

use yew::prelude::*;

use crate::state::{Carousel, Filter};

const PALETTES: &[&str] = &[
    "linear-gradient(135deg, #3b82f6, #22d3ee)",
    "linear-gradient(135deg, #a855f7, #ec4899)",
    "linear-gradient(135deg, #22c55e, #2dd4bf)",
    "linear-gradient(135deg, #facc15, #f97316)",
    "linear-gradient(135deg, #ef4444, #db2777)",
    "linear-gradient(135deg, #6366f1, #2563eb)",
    "linear-gradient(135deg, #06b6d4, #3b82f6)",
    "linear-gradient(135deg, #9333ea, #4f46e5)",
];

const ASPECTS: &[&str] = &["aspect-square", "aspect-portrait", "aspect-landscape", "aspect-wide"];

// Tile categories cycle through the portfolio filter tags.
const CATEGORIES: &[&str] = &["web", "mobile", "ui", "cloud"];

#[derive(Clone, PartialEq)]
pub struct Tile {
    pub title: String,
    pub description: String,
    pub gradient: &'static str,
    pub aspect: &'static str,
    pub category: &'static str,
}

pub fn tiles(count: usize) -> Vec<Tile> {
    (0..count)
        .map(|i| Tile {
            title: format!("Project {}", i + 1),
            description: format!(
                "This is a sample project description for image {}. It showcases our work in design and development.",
                i + 1
            ),
            gradient: PALETTES[i % PALETTES.len()],
            aspect: ASPECTS[i % ASPECTS.len()],
            category: CATEGORIES[i % CATEGORIES.len()],
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    #[prop_or(12)]
    pub count: usize,
    #[prop_or_default]
    pub filter: Filter<&'static str>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let all_tiles = tiles(props.count);
    let visible: Vec<Tile> = all_tiles
        .into_iter()
        .filter(|tile| props.filter.matches(&tile.category))
        .collect();

    // Lightbox cursor over the visible subset; None while closed.
    let lightbox = use_state(|| None::<Carousel>);

    let close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set(None))
    };

    let open_tile = |i: usize, len: usize| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set(Some(Carousel::new(len).go_to(i))))
    };

    let visible_len = visible.len();

    html! {
        <div class="gallery">
            <div class="gallery-grid">
                {
                    for visible.iter().enumerate().map(|(i, tile)| html! {
                        <div
                            class={classes!("gallery-tile", tile.aspect)}
                            style={format!("background: {};", tile.gradient)}
                            onclick={open_tile(i, visible_len)}
                        >
                            <h3>{&tile.title}</h3>
                            <p>{&tile.description}</p>
                        </div>
                    })
                }
            </div>
            {
                // A filter change can shrink the visible set under an open
                // lightbox; treat an out-of-range cursor as closed.
                if let Some(cursor) = (*lightbox).filter(|c| c.index() < visible_len) {
                    let tile = &visible[cursor.index()];
                    let on_prev = {
                        let lightbox = lightbox.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            lightbox.set(Some(cursor.prev()));
                        })
                    };
                    let on_next = {
                        let lightbox = lightbox.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            lightbox.set(Some(cursor.next()));
                        })
                    };
                    // Clicks inside the frame must not reach the backdrop.
                    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

                    html! {
                        <div class="lightbox-backdrop" onclick={close.clone()}>
                            <div class="lightbox-frame" onclick={swallow}>
                                <div class="lightbox-panel" style={format!("background: {};", tile.gradient)}>
                                    <h2>{&tile.title}</h2>
                                    <p>{&tile.description}</p>
                                </div>
                                <button class="lightbox-close" onclick={close.clone()} aria-label="Close">
                                    {"✕"}
                                </button>
                                <button class="lightbox-nav lightbox-prev" onclick={on_prev} aria-label="Previous image">
                                    {"‹"}
                                </button>
                                <button class="lightbox-nav lightbox-next" onclick={on_next} aria-label="Next image">
                                    {"›"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

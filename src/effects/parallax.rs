use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn flips_sign(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

// Linear map of scroll position onto a translation percentage. The domain is
// the window where the element can be on screen, [top - viewport, top + viewport];
// outside it the line keeps extrapolating rather than clamping.
pub fn offset_percent(
    scroll: f64,
    element_top: f64,
    viewport_h: f64,
    direction: Direction,
    intensity: f64,
) -> f64 {
    let start = element_top - viewport_h;
    let progress = (scroll - start) / (2.0 * viewport_h);
    let swing = intensity * 100.0;
    let offset = swing - 2.0 * swing * progress;
    if direction.flips_sign() {
        -offset
    } else {
        offset
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub children: Children,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(0.2)]
    pub intensity: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| 0.0_f64);

    {
        let node = node.clone();
        let offset = offset.clone();
        let direction = props.direction;
        let intensity = props.intensity;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let update = Closure::wrap(Box::new(move || {
                    let window = match web_sys::window() {
                        Some(w) => w,
                        None => return,
                    };
                    // Geometry is re-read on every event, so a resize just
                    // feeds the next computation fresh numbers.
                    let viewport_h = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if viewport_h <= 0.0 {
                        return;
                    }
                    if let Some(element) = node.cast::<HtmlElement>() {
                        let scroll = window.scroll_y().unwrap_or(0.0);
                        let top = element.offset_top() as f64;
                        offset.set(offset_percent(scroll, top, viewport_h, direction, intensity));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", update.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", update.as_ref().unchecked_ref())
                    .unwrap();

                // Initial position
                update
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", update.as_ref().unchecked_ref());
                    let _ = window
                        .remove_event_listener_with_callback("resize", update.as_ref().unchecked_ref());
                }
            },
            (),
        );
    }

    let transform = if props.direction.is_horizontal() {
        format!("transform: translateX({:.3}%);", *offset)
    } else {
        format!("transform: translateY({:.3}%);", *offset)
    };

    html! {
        <div ref={node} class={classes!("parallax", props.class.clone())}>
            <div class="parallax-inner" style={transform}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{offset_percent, Direction};

    const TOP: f64 = 2000.0;
    const VIEW: f64 = 800.0;

    #[test]
    fn offset_is_positive_extreme_where_the_domain_begins() {
        let o = offset_percent(TOP - VIEW, TOP, VIEW, Direction::Up, 0.3);
        assert!((o - 30.0).abs() < 1e-9);
    }

    #[test]
    fn offset_is_negative_extreme_where_the_domain_ends() {
        let o = offset_percent(TOP + VIEW, TOP, VIEW, Direction::Up, 0.3);
        assert!((o + 30.0).abs() < 1e-9);
    }

    #[test]
    fn offset_is_zero_when_the_element_tops_the_viewport() {
        let o = offset_percent(TOP, TOP, VIEW, Direction::Up, 0.5);
        assert!(o.abs() < 1e-9);
    }

    #[test]
    fn offset_is_linear_between_the_extremes() {
        let quarter = offset_percent(TOP - VIEW / 2.0, TOP, VIEW, Direction::Up, 0.2);
        assert!((quarter - 10.0).abs() < 1e-9);
    }

    #[test]
    fn offset_decreases_monotonically_as_scroll_grows() {
        let mut last = f64::INFINITY;
        for step in 0..=8 {
            let s = TOP - VIEW + f64::from(step) * (VIEW / 4.0);
            let o = offset_percent(s, TOP, VIEW, Direction::Up, 0.4);
            assert!(o < last);
            last = o;
        }
    }

    #[test]
    fn down_mirrors_up() {
        let up = offset_percent(TOP - VIEW, TOP, VIEW, Direction::Up, 0.2);
        let down = offset_percent(TOP - VIEW, TOP, VIEW, Direction::Down, 0.2);
        assert!((up + down).abs() < 1e-9);
    }

    #[test]
    fn right_mirrors_left() {
        let left = offset_percent(TOP + VIEW, TOP, VIEW, Direction::Left, 0.25);
        let right = offset_percent(TOP + VIEW, TOP, VIEW, Direction::Right, 0.25);
        assert!((left + right).abs() < 1e-9);
    }

    #[test]
    fn offset_extrapolates_linearly_outside_the_domain() {
        let o = offset_percent(TOP + 2.0 * VIEW, TOP, VIEW, Direction::Up, 0.2);
        assert!((o + 40.0).abs() < 1e-9);
    }
}

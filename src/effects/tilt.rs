use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub glare_x: f64,
    pub glare_y: f64,
    pub glare_opacity: f64,
}

// Pointer position inside the card maps to two rotation angles plus the
// glare spot. Zero-sized boxes yield None so the caller keeps the last state.
pub fn tilt_for(x: f64, y: f64, width: f64, height: f64, intensity: f64) -> Option<Tilt> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let rotate_y = ((x - width / 2.0) / width) * intensity;
    let rotate_x = -((y - height / 2.0) / height) * intensity;
    let glare_opacity = if intensity == 0.0 {
        0.0
    } else {
        rotate_x.abs().max(rotate_y.abs()) / (2.0 * intensity)
    };
    Some(Tilt {
        rotate_x,
        rotate_y,
        glare_x: x / width,
        glare_y: y / height,
        glare_opacity,
    })
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(15.0)]
    pub rotation_intensity: f64,
    #[prop_or(1.05)]
    pub hover_scale: f64,
    #[prop_or(1000.0)]
    pub perspective: f64,
    #[prop_or(true)]
    pub glare: bool,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state(Tilt::default);
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        let intensity = props.rotation_intensity;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<HtmlElement>() {
                let rect = element.get_bounding_client_rect();
                let x = f64::from(e.client_x()) - rect.left();
                let y = f64::from(e.client_y()) - rect.top();
                if let Some(next) = tilt_for(x, y, rect.width(), rect.height(), intensity) {
                    tilt.set(next);
                }
            }
        })
    };

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set(Tilt::default());
            hovered.set(false);
        })
    };

    let scale = if *hovered { props.hover_scale } else { 1.0 };
    let outer_style = format!("perspective: {}px;", props.perspective);
    let inner_style = format!(
        "transform: rotateX({:.2}deg) rotateY({:.2}deg) scale({});",
        tilt.rotate_x, tilt.rotate_y, scale
    );
    let glare_style = format!(
        "background: radial-gradient(circle at {:.1}% {:.1}%, rgba(255,255,255,0.85), transparent 60%); opacity: {:.3};",
        tilt.glare_x * 100.0,
        tilt.glare_y * 100.0,
        tilt.glare_opacity
    );

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={outer_style}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="tilt-card-inner" style={inner_style}>
                { for props.children.iter() }
                {
                    if props.glare {
                        html! { <div class="tilt-card-glare" style={glare_style}></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::tilt_for;

    #[test]
    fn center_pointer_leaves_the_card_flat() {
        let t = tilt_for(150.0, 100.0, 300.0, 200.0, 15.0).unwrap();
        assert!(t.rotate_x.abs() < 1e-9);
        assert!(t.rotate_y.abs() < 1e-9);
        assert!(t.glare_opacity.abs() < 1e-9);
    }

    #[test]
    fn rotation_magnitude_never_exceeds_the_intensity() {
        let corners = [(0.0, 0.0), (300.0, 0.0), (0.0, 200.0), (300.0, 200.0)];
        for (x, y) in corners {
            let t = tilt_for(x, y, 300.0, 200.0, 15.0).unwrap();
            assert!(t.rotate_x.abs() <= 15.0);
            assert!(t.rotate_y.abs() <= 15.0);
        }
    }

    #[test]
    fn right_edge_rotates_around_y_only() {
        let t = tilt_for(300.0, 100.0, 300.0, 200.0, 10.0).unwrap();
        assert!((t.rotate_y - 5.0).abs() < 1e-9);
        assert!(t.rotate_x.abs() < 1e-9);
    }

    #[test]
    fn bottom_edge_tips_the_card_back() {
        let t = tilt_for(150.0, 200.0, 300.0, 200.0, 10.0).unwrap();
        assert!((t.rotate_x + 5.0).abs() < 1e-9);
    }

    #[test]
    fn glare_follows_the_pointer_into_a_corner() {
        let t = tilt_for(300.0, 0.0, 300.0, 200.0, 10.0).unwrap();
        assert!((t.glare_x - 1.0).abs() < 1e-9);
        assert!(t.glare_y.abs() < 1e-9);
        assert!((t.glare_opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_boxes_skip_the_update() {
        assert!(tilt_for(10.0, 10.0, 0.0, 200.0, 10.0).is_none());
        assert!(tilt_for(10.0, 10.0, 300.0, 0.0, 10.0).is_none());
    }

    #[test]
    fn zero_intensity_keeps_the_card_flat_everywhere() {
        let t = tilt_for(300.0, 200.0, 300.0, 200.0, 0.0).unwrap();
        assert!(t.rotate_x.abs() < 1e-9);
        assert!(t.rotate_y.abs() < 1e-9);
        assert!(t.glare_opacity.abs() < 1e-9);
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// One visibility-tracked region instead of a scroll handler per section.
// Attach the returned ref to the element you want watched; the flag flips
// when the threshold fraction of it crosses the viewport. With `once` the
// first reveal is terminal and the observer disconnects itself.
#[hook]
pub fn use_in_view(threshold: f64, once: bool) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut on_intersect = None;

                if let Some(element) = node.cast::<Element>() {
                    let flag = visible.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, obs: IntersectionObserver| {
                            let entry = entries
                                .iter()
                                .last()
                                .and_then(|e| e.dyn_into::<IntersectionObserverEntry>().ok());
                            if let Some(entry) = entry {
                                if entry.is_intersecting() {
                                    flag.set(true);
                                    if once {
                                        obs.disconnect();
                                    }
                                } else if !once {
                                    flag.set(false);
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                            on_intersect = Some(callback);
                        }
                        // No observer support degrades to always visible.
                        Err(_) => visible.set(true),
                    }
                } else {
                    visible.set(true);
                }

                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (),
        );
    }

    (node, *visible)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(0.15)]
    pub threshold: f64,
    #[prop_or_default]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, visible) = use_in_view(props.threshold, props.once);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

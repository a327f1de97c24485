use yew::prelude::*;
use yew_hooks::use_interval;

use crate::effects::reveal::use_in_view;

const TICK_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: &'static str,
    pub label: &'static str,
}

// Counts up toward the target once the stat scrolls into view. The interval
// is parked at 0ms while hidden or finished, which is how use_interval pauses.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let (node, visible) = use_in_view(0.3, false);
    let count = use_state(|| 0u32);
    let target = props.value;

    let millis = if visible && *count < target { TICK_MS } else { 0 };
    {
        let count = count.clone();
        use_interval(
            move || {
                let step = (target / 40).max(1);
                count.set((*count + step).min(target));
            },
            millis,
        );
    }

    html! {
        <div ref={node} class="stat">
            <div class="stat-number">{format!("{}{}", *count, props.suffix)}</div>
            <div class="stat-label">{props.label}</div>
        </div>
    }
}

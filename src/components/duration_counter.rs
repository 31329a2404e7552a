use chrono::Utc;
use gloo_timers::callback::Interval;
use log::warn;
use yew::prelude::*;

use crate::config;
use crate::duration::Elapsed;

fn elapsed_now() -> String {
    match config::start_moment() {
        Some(start) => Elapsed::since(start, Utc::now()).to_string(),
        None => {
            warn!("Start moment is not a valid timestamp");
            Elapsed::default().to_string()
        }
    }
}

/// Live "time since" text, refreshed once a second while mounted.
#[function_component]
pub fn DurationCounter() -> Html {
    let text = use_state(elapsed_now);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::TICK_MS, move || {
                    text.set(elapsed_now());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <span class="duration-counter">{(*text).clone()}</span>
    }
}

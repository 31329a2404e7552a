use log::info;
use yew::prelude::*;

mod config;
mod confetti;
mod duration;
mod evasion;
mod passcode;
mod session;
mod theme;
mod pages {
    pub mod courting;
    pub mod gate;
}
mod components {
    pub mod duration_counter;
    pub mod evasive_button;
    pub mod proof_modal;
    pub mod success_overlay;
}

use pages::{courting::CourtingPage, gate::Gate};
use session::Unlock;
use theme::Theme;

#[function_component]
fn App() -> Html {
    let unlock = use_state(Unlock::default);

    let on_success = {
        let unlock = unlock.clone();
        Callback::from(move |_| {
            let mut next = *unlock;
            if next.unlock() {
                info!("Gate unlocked, rendering courting page");
                unlock.set(next);
            }
        })
    };

    html! {
        <>
            <Theme />
            {
                if unlock.is_unlocked() {
                    html! { <CourtingPage /> }
                } else {
                    html! { <Gate {on_success} /> }
                }
            }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

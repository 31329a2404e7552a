use log::info;
use yew::prelude::*;

use crate::components::{
    duration_counter::DurationCounter,
    evasive_button::EvasiveButton,
    proof_modal::ProofModal,
    success_overlay::SuccessOverlay,
};
use crate::config;
use crate::session::CourtingState;

#[function_component]
pub fn CourtingPage() -> Html {
    let state = use_state(CourtingState::default);

    let on_yes = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Yes pressed, showing success overlay");
            let mut next = (*state).clone();
            next.yes(&mut rand::rng());
            state.set(next);
        })
    };

    let open_proof = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.open_proof();
            state.set(next);
        })
    };

    let close_proof = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.close_proof();
            state.set(next);
        })
    };

    html! {
        <div class="courting-page">
            <div class="courting-card">
                <span class="heart-graphic">{"💕"}</span>

                <h1 class="courting-heading">
                    {"Hi "}<span class="recipient-name">{config::RECIPIENT_NAME}</span>{","}<br />
                    {"can I "}<strong>{"court"}</strong>{" you?"}
                </h1>

                <p class="courting-message">
                    {"I know we've just met — "}
                    <DurationCounter />
                    {" ago to be exact ("}
                    <button class="proof-link" onclick={open_proof}>{"here's proof"}</button>
                    {") — but in that time, I’ve genuinely enjoyed getting to know you and I feel a strong connection. \
                      I wanted to ask because I’d like to pursue you intentionally. \
                      No pressure at all. If now isn’t the right time for you, that’s completely okay. 🌸"}
                </p>

                <div class="buttons-row">
                    <button class="btn btn-yes" onclick={on_yes}>{"Yes 💗"}</button>
                    <EvasiveButton label="No 🙈" />
                </div>
            </div>

            {
                if state.is_success_shown() {
                    html! { <SuccessOverlay particles={state.confetti().to_vec()} /> }
                } else {
                    html! {}
                }
            }

            {
                if state.is_proof_shown() {
                    html! { <ProofModal on_close={close_proof} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .courting-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }

                .courting-card {
                    background: rgba(255, 255, 255, 0.88);
                    border-radius: 28px;
                    padding: 2.5rem 2rem;
                    max-width: 520px;
                    width: 100%;
                    text-align: center;
                    box-shadow: 0 16px 48px rgba(198, 58, 115, 0.18);
                }

                .heart-graphic {
                    display: block;
                    font-size: 3rem;
                    margin-bottom: 0.5rem;
                    animation: heartbeat 1.4s ease-in-out infinite;
                }

                @keyframes heartbeat {
                    0%, 100% { transform: scale(1); }
                    15% { transform: scale(1.15); }
                    30% { transform: scale(1); }
                    45% { transform: scale(1.1); }
                }

                .courting-heading {
                    font-size: 1.9rem;
                    line-height: 1.3;
                    margin: 0 0 1rem;
                }

                .recipient-name {
                    color: #c63a73;
                }

                .courting-message {
                    font-size: 1rem;
                    line-height: 1.6;
                    margin: 0 0 2rem;
                }

                .duration-counter {
                    font-weight: 700;
                    color: #e8608f;
                }

                .proof-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: #c63a73;
                    text-decoration: underline;
                    cursor: pointer;
                    font: inherit;
                }

                .buttons-row {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .btn-yes {
                    background: linear-gradient(135deg, #ff85a1, #e8608f);
                    color: #fff;
                    box-shadow: 0 6px 18px rgba(232, 96, 143, 0.35);
                }

                .btn-no {
                    background: #fff;
                    color: #c63a73;
                    border: 2px solid #f9a8c9;
                }

                .btn-no.evasive {
                    z-index: 500;
                    transition: left 0.2s ease, top 0.2s ease;
                }
                "#}
            </style>
        </div>
    }
}

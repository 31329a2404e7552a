use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ProofModalProps {
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ProofModal(props: &ProofModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="proof-backdrop" onclick={close.clone()}>
            <div class="proof-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="proof-close" onclick={close} aria-label="Close">{"✕"}</button>
                <img src={config::PROOF_IMAGE_SRC} alt={config::PROOF_IMAGE_ALT} class="proof-img" />
                <p class="proof-caption">{config::PROOF_CAPTION}</p>
            </div>

            <style>
                {r#"
                .proof-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(90, 42, 63, 0.45);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 900;
                    padding: 1rem;
                }

                .proof-modal {
                    position: relative;
                    background: #fff;
                    border-radius: 20px;
                    padding: 1rem;
                    max-width: min(420px, 92vw);
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.25);
                }

                .proof-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    border: none;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 50%;
                    width: 2rem;
                    height: 2rem;
                    cursor: pointer;
                    font-size: 1rem;
                }

                .proof-img {
                    display: block;
                    width: 100%;
                    border-radius: 12px;
                }

                .proof-caption {
                    margin: 0.75rem 0 0.25rem;
                    text-align: center;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::confetti::Particle;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SuccessOverlayProps {
    pub particles: Vec<Particle>,
}

// No close action: once shown it stays until reload.
#[function_component]
pub fn SuccessOverlay(props: &SuccessOverlayProps) -> Html {
    html! {
        <div class="success-overlay">
            <div class="confetti-layer" aria-hidden="true">
                { props.particles.iter().enumerate().map(|(i, p)| html! {
                    <span key={i.to_string()} class="confetti-piece" style={p.style()} />
                }).collect::<Html>() }
            </div>

            <div class="success-card">
                <div class="success-image-single">
                    <img
                        class="success-img-single"
                        src={config::SUCCESS_IMAGE_SRC}
                        alt={config::SUCCESS_IMAGE_ALT}
                    />
                </div>
            </div>

            <style>
                {r#"
                .success-overlay {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 240, 245, 0.92);
                    z-index: 1000;
                    overflow: hidden;
                }

                .confetti-layer {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .confetti-piece {
                    position: absolute;
                    top: -20px;
                    border-radius: 2px;
                    opacity: 0.9;
                    animation-name: confetti-fall, confetti-sway;
                    animation-timing-function: linear, ease-in-out;
                    animation-iteration-count: infinite, infinite;
                    animation-fill-mode: both;
                }

                @keyframes confetti-fall {
                    0% { top: -20px; }
                    100% { top: 110vh; }
                }

                @keyframes confetti-sway {
                    0%, 100% { margin-left: 0; }
                    50% { margin-left: 30px; }
                }

                .success-card {
                    position: relative;
                    background: #fff;
                    border-radius: 24px;
                    padding: 1.5rem;
                    box-shadow: 0 16px 48px rgba(198, 58, 115, 0.25);
                    animation: pop-in 0.4s ease-out;
                }

                @keyframes pop-in {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }

                .success-img-single {
                    display: block;
                    max-width: min(320px, 80vw);
                    height: auto;
                }
                "#}
            </style>
        </div>
    }
}

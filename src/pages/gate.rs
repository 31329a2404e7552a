use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::passcode::PasscodeForm;

#[derive(Properties, PartialEq)]
pub struct GateProps {
    pub on_success: Callback<()>,
}

#[function_component]
pub fn Gate(props: &GateProps) -> Html {
    let form = use_state(PasscodeForm::default);
    let input_ref = use_node_ref();

    // The card remounts after every failure, so focus again each time
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    if input.focus().is_err() {
                        debug!("Could not focus passcode input");
                    }
                }
                || ()
            },
            form.failures(),
        );
    }

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.input(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit(config::PASSCODE) {
                Ok(()) => {
                    info!("Passcode accepted");
                    form.set(next);
                    on_success.emit(());
                }
                Err(err) => {
                    debug!("Rejected attempt #{}: {}", next.failures(), err);
                    form.set(next);
                }
            }
        })
    };

    html! {
        <div class="password-page">
            <div
                key={form.failures().to_string()}
                class={classes!("password-card", form.is_shaking().then(|| "shake"))}
            >
                <span class="lock-icon">{"🔒"}</span>

                <h1 class="password-heading">{format!("For {}", config::RECIPIENT_NAME)}</h1>
                <p class="password-subtitle">{"Nasa likod ng papel ang passcode"}</p>

                <form onsubmit={on_submit} class="password-form">
                    <input
                        ref={input_ref}
                        type="password"
                        class="password-input"
                        placeholder="Enter passcode..."
                        value={form.attempt().to_string()}
                        oninput={on_input}
                        autofocus=true
                    />
                    <button type="submit" class="btn btn-unlock">{"Unlock"}</button>
                </form>
            </div>

            <style>
                {r#"
                .password-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }

                .password-card {
                    background: rgba(255, 255, 255, 0.85);
                    border-radius: 24px;
                    padding: 2.5rem 2rem;
                    width: 100%;
                    max-width: 380px;
                    text-align: center;
                    box-shadow: 0 12px 40px rgba(198, 58, 115, 0.18);
                    backdrop-filter: blur(8px);
                }

                .password-card.shake {
                    animation: shake 0.45s ease-in-out;
                }

                @keyframes shake {
                    0%, 100% { transform: translateX(0); }
                    20% { transform: translateX(-10px); }
                    40% { transform: translateX(10px); }
                    60% { transform: translateX(-6px); }
                    80% { transform: translateX(6px); }
                }

                .lock-icon {
                    font-size: 2.5rem;
                    display: block;
                    margin-bottom: 0.75rem;
                }

                .password-heading {
                    margin: 0 0 0.5rem;
                    font-size: 1.8rem;
                    color: #c63a73;
                }

                .password-subtitle {
                    margin: 0 0 1.5rem;
                    font-size: 0.95rem;
                    opacity: 0.8;
                }

                .password-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .password-input {
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    border: 2px solid #f9a8c9;
                    font-size: 1rem;
                    outline: none;
                    text-align: center;
                }

                .password-input:focus {
                    border-color: #e8608f;
                }

                .btn-unlock {
                    background: linear-gradient(135deg, #ff85a1, #e8608f);
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}

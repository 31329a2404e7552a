use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide base styles shared by both screens.
#[function_component]
pub fn Theme() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }

            html, body {
                margin: 0;
                padding: 0;
                min-height: 100vh;
                font-family: "Quicksand", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                color: #5a2a3f;
                background: linear-gradient(160deg, #fff0f5 0%, #ffe4ec 50%, #ffd6e4 100%);
                overflow-x: hidden;
            }

            .btn {
                border: none;
                border-radius: 999px;
                padding: 0.75rem 1.75rem;
                font-size: 1.05rem;
                font-weight: 600;
                cursor: pointer;
                transition: transform 0.15s ease, box-shadow 0.15s ease;
            }

            .btn:active {
                transform: scale(0.97);
            }
        "#)} />
    }
}

use log::debug;
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::evasion::{BoundingBox, Evasion, Viewport};

#[derive(Properties, PartialEq)]
pub struct EvasiveButtonProps {
    pub label: AttrValue,
}

fn measure(button_ref: &NodeRef) -> Option<BoundingBox> {
    let rect = button_ref.cast::<Element>()?.get_bounding_client_rect();
    Some(BoundingBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// A button that jumps somewhere else whenever the pointer gets to it.
#[function_component]
pub fn EvasiveButton(props: &EvasiveButtonProps) -> Html {
    let evasion = use_state(Evasion::default);
    let button_ref = use_node_ref();
    let (width, height) = use_window_size();

    let dodge = {
        let evasion = evasion.clone();
        let button_ref = button_ref.clone();
        Callback::from(move |_: ()| {
            let viewport = Viewport { width, height };
            let next = (*evasion).dodge(&mut rand::rng(), measure(&button_ref), viewport);
            let pos = next.position();
            debug!("Dodged to ({}, {})", pos.x, pos.y);
            evasion.set(next);
        })
    };

    let on_mouse = {
        let dodge = dodge.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dodge.emit(());
        })
    };

    let on_touch = Callback::from(move |e: TouchEvent| {
        e.prevent_default();
        dodge.emit(());
    });

    let is_evasive = evasion.is_evasive();
    let style = is_evasive.then(|| {
        let pos = evasion.position();
        format!("position: fixed; left: {}px; top: {}px;", pos.x, pos.y)
    });

    html! {
        <button
            ref={button_ref}
            class={classes!("btn", "btn-no", is_evasive.then(|| "evasive"))}
            style={style}
            onmouseenter={on_mouse.clone()}
            onmousemove={is_evasive.then(|| on_mouse.clone())}
            onclick={on_mouse}
            ontouchstart={on_touch}
        >
            {props.label.clone()}
        </button>
    }
}

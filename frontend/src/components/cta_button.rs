use gloo_timers::callback::Timeout;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Opens the sign-up form in a new tab, then stays disabled briefly so a
/// double click doesn't open two.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let disabled = use_state(|| false);

    let onclick = {
        let disabled = disabled.clone();
        Callback::from(move |_: MouseEvent| {
            disabled.set(true);
            if let Some(window) = window() {
                if let Err(e) = window.open_with_url_and_target_and_features(
                    config::form_url(),
                    "_blank",
                    "noopener,noreferrer",
                ) {
                    log::warn!("Failed to open sign-up form: {:?}", e);
                }
            }
            let disabled = disabled.clone();
            Timeout::new(config::CTA_COOLDOWN_MS, move || disabled.set(false)).forget();
        })
    };

    html! {
        <button
            class={props.class.clone()}
            disabled={*disabled}
            style={disabled.then_some("opacity: 0.8;")}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;
use crate::config::THEMES;
use crate::utils::theme::{apply_theme, load_theme, save_theme, BrowserStorage};

#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let theme = use_state(|| load_theme(&BrowserStorage));

    {
        let current = (*theme).clone();
        use_effect_with_deps(
            move |theme: &String| {
                apply_theme(theme);
                || ()
            },
            current,
        );
    }

    html! {
        <div class="theme-switcher">
            {
                for THEMES.iter().map(|&(id, label)| {
                    let onclick = {
                        let theme = theme.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Err(e) = save_theme(&BrowserStorage, id) {
                                log::warn!("Theme not saved, keeping it for this visit only: {}", e);
                            }
                            theme.set(id.to_string());
                        })
                    };
                    html! {
                        <button
                            class={classes!("theme-btn", (*theme == id).then_some("active"))}
                            data-theme={id}
                            title={label}
                            {onclick}
                        >
                            {label}
                        </button>
                    }
                })
            }
        </div>
    }
}

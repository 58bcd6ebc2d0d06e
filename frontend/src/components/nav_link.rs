use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use crate::utils::effects::anchor_target;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly to its `#target`.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if !href.starts_with('#') {
                return;
            }
            e.prevent_default();
            let target = anchor_target(&href)
                .and_then(|id| window().and_then(|w| w.document())?.get_element_by_id(id));
            if let Some(target) = target {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

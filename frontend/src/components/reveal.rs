use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use crate::utils::effects::{reveal_style, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_intersect = {
                        let visible = visible.clone();
                        Closure::<dyn Fn(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        visible.set(true);
                                        observer.unobserve(&entry.target());
                                    }
                                }
                            },
                        )
                    };
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                    options.set_root_margin(REVEAL_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, on_intersect));
                        }
                        Err(e) => {
                            // No observer support, just show the content
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, _on_intersect)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*visible)}>
            { for props.children.iter() }
        </div>
    }
}

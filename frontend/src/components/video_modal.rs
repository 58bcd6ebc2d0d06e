use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlVideoElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use crate::config;
use crate::utils::media::{
    is_dismiss_target, set_body_scroll_locked, start_playback, stop_playback, MODAL_ID,
};

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let video = use_node_ref();

    // Play on open, rewind on close
    {
        let video = video.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if let Some(player) = video.cast::<HtmlVideoElement>() {
                    if *open {
                        set_body_scroll_locked(true);
                        spawn_local(async move {
                            if let Err(e) = start_playback(&player).await {
                                log::info!("Video autoplay blocked: {}", e);
                            }
                        });
                    } else {
                        stop_playback(&player);
                        set_body_scroll_locked(false);
                    }
                }
                || ()
            },
            props.open,
        );
    }

    // Escape closes while open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |(open, on_close): &(bool, Callback<()>)| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window().and_then(|w| w.document()) {
                    Some(document) if *open => {
                        let on_close = on_close.clone();
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        });
                        let _ = document
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref());
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || {
                    destructor();
                }
            },
            (props.open, on_close),
        );
    }

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target: Element = e.target_unchecked_into();
            if is_dismiss_target(&target.id(), &target.class_name()) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div id={MODAL_ID} class={classes!("video-modal", props.open.then_some("active"))} {onclick}>
            <div class="video-modal-content">
                <button class="close-modal" aria-label="Close video">{"×"}</button>
                <video
                    ref={video}
                    id="videoPlayer"
                    class="modal-video"
                    src={config::promo_video_src()}
                    controls=true
                    playsinline=true
                ></video>
            </div>
        </div>
    }
}

use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;
use crate::utils::carousel::{Carousel, CarouselAction, Direction};
use crate::utils::roster::{Member, Roster};

#[derive(Properties, PartialEq)]
pub struct TeamCarouselProps {
    pub roster: Rc<Roster>,
}

fn member_card(member: &Member) -> Html {
    html! {
        <div class="team-member">
            <div class="member-image-container">
                <img src={member.portrait.clone()} alt={member.name.clone()} class="member-image" loading="lazy" />
            </div>
            <div class="member-info">
                <h3 class="member-name">{&member.name}</h3>
                <p class="member-position">{&member.role}</p>
                <p class="member-bio">{&member.bio}</p>
                <div class="member-fun-fact">
                    <div class="fun-fact-label">{format!("{} Fun Fact", member.badge)}</div>
                    <div class="fun-fact-text">{&member.highlight}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(TeamCarousel)]
pub fn team_carousel(props: &TeamCarouselProps) -> Html {
    let carousel = {
        let roster = props.roster.clone();
        use_reducer(move || Carousel::new(roster))
    };
    let touch_start_x = use_mut_ref(|| 0.0_f64);

    // Arrow keys rotate the team from anywhere on the page
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if let Some(direction) = Direction::from_key(&e.key()) {
                                dispatcher.dispatch(CarouselAction::Advance(direction));
                            }
                        });
                        if document
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            log::warn!("Failed to attach carousel keyboard listener");
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let ontouchstart = {
        let touch_start_x = touch_start_x.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                *touch_start_x.borrow_mut() = touch.screen_x() as f64;
            }
        })
    };

    let ontouchend = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                let start = *touch_start_x.borrow();
                if let Some(direction) = Direction::from_swipe(start, touch.screen_x() as f64) {
                    dispatcher.dispatch(CarouselAction::Advance(direction));
                }
            }
        })
    };

    let step = |direction: Direction| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Advance(direction)))
    };

    let plan = carousel.render();

    html! {
        <div class="team-carousel">
            <button class="carousel-btn prev" aria-label="Previous team member" onclick={step(Direction::Backward)}>
                {"‹"}
            </button>
            <div class="team-track" id="teamTrack" {ontouchstart} {ontouchend}>
                <div class="team-slide">
                    { for plan.cards.iter().map(member_card) }
                </div>
            </div>
            <button class="carousel-btn next" aria-label="Next team member" onclick={step(Direction::Forward)}>
                {"›"}
            </button>
            <div class="carousel-indicators" id="indicators">
                {
                    for (0..plan.indicator_count).map(|index| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(CarouselAction::JumpTo(index));
                        });
                        html! {
                            <button
                                class={classes!("indicator", plan.is_active(index).then_some("active"))}
                                aria-label={format!("Show team member {}", index + 1)}
                                {onclick}
                            />
                        }
                    })
                }
            </div>
        </div>
    }
}

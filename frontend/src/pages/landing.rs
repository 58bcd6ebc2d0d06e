use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use crate::components::cta_button::CtaButton;
use crate::components::nav_link::NavLink;
use crate::components::reveal::Reveal;
use crate::components::team_carousel::TeamCarousel;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::video_modal::VideoModal;
use crate::utils::effects::{shape_transform, DONUT, PUZZLE};
use crate::utils::roster::Roster;

const PROBLEMS: &[(&str, &str, &str)] = &[
    ("😴", "Studying feels like a chore", "Textbooks and flashcards lose to every notification on the phone."),
    ("📉", "Motivation drops off fast", "Most learners quit a new study habit within the first two weeks."),
    ("🧩", "Progress is invisible", "Without feedback loops, nobody knows if the effort is paying off."),
];

const TRACTION: &[(&str, &str)] = &[
    ("2,400+", "waitlist sign-ups"),
    ("87%", "of testers came back the next day"),
    ("500+", "study quests designed"),
];

const STEPS: &[(&str, &str, &str)] = &[
    ("1", "Pick a subject", "Import your syllabus or choose from ready-made quest lines."),
    ("2", "Play your quests", "Short, game-like sessions turn revision into progress."),
    ("3", "Level up", "Streaks, badges and friendly rivalries keep you coming back."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll_y = use_state(|| 0.0);
    let video_open = use_state(|| false);
    let roster = use_memo(
        |_| {
            Roster::bundled().map(Rc::new).map_err(|e| {
                log::error!("Team roster unavailable: {}", e);
                e
            })
        },
        (),
    );

    // Parallax shapes, at most one update per animation frame
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let ticking = Rc::new(Cell::new(false));
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            if ticking.get() {
                                return;
                            }
                            ticking.set(true);
                            let pending = ticking.clone();
                            let scroll_y = scroll_y.clone();
                            let frame = Closure::once_into_js(move || {
                                if let Some(win) = web_sys::window() {
                                    if let Ok(y) = win.scroll_y() {
                                        scroll_y.set(y);
                                    }
                                }
                                pending.set(false);
                            });
                            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                                ticking.set(false);
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Failed to attach parallax scroll listener");
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
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

    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: MouseEvent| video_open.set(true))
    };
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: ()| video_open.set(false))
    };

    html! {
        <div class="landing-page">
            <nav class="top-nav">
                <NavLink href="#hero" class={classes!("nav-logo")}>{"Ludera"}</NavLink>
                <div class="nav-links">
                    <NavLink href="#problem">{"Why"}</NavLink>
                    <NavLink href="#how-it-works">{"How it works"}</NavLink>
                    <NavLink href="#team">{"Team"}</NavLink>
                </div>
                <ThemeSwitcher />
                <CtaButton class={classes!("btn-join")}>{"Join the waitlist"}</CtaButton>
            </nav>

            <header class="hero" id="hero">
                <div class="shape shape-puzzle" style={format!("transform: {};", shape_transform(*scroll_y, PUZZLE))}></div>
                <div class="shape shape-donut" style={format!("transform: {};", shape_transform(*scroll_y, DONUT))}></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Studying, but make it a game."}</h1>
                    <p class="hero-subtitle">
                        {"Ludera turns your syllabus into quests, streaks and boss fights, so revision feels like the best part of your day."}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton class={classes!("btn-cta-large")}>{"Get early access"}</CtaButton>
                        <button class="btn-video" onclick={open_video}>{"▶ Watch the demo"}</button>
                    </div>
                </div>
            </header>

            <section class="problem-section" id="problem">
                <h2>{"Learning lost the attention war"}</h2>
                <div class="problem-grid">
                    {
                        for PROBLEMS.iter().map(|&(icon, title, text)| html! {
                            <Reveal class={classes!("problem-card")}>
                                <div class="card-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="traction-section">
                <div class="traction-grid">
                    {
                        for TRACTION.iter().map(|&(figure, label)| html! {
                            <Reveal class={classes!("traction-card")}>
                                <div class="traction-figure">{figure}</div>
                                <div class="traction-label">{label}</div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="features-section">
                <Reveal class={classes!("feature-large")}>
                    <h2>{"Your coursework, rebuilt as a world"}</h2>
                    <p>{"Every chapter becomes a zone to explore. Quizzes become encounters, and mastery unlocks the next region of the map."}</p>
                </Reveal>
            </section>

            <section class="how-it-works-section" id="how-it-works">
                <Reveal class={classes!("how-it-works")}>
                    <h2>{"How it works"}</h2>
                    <div class="steps-grid">
                        {
                            for STEPS.iter().map(|&(number, title, text)| html! {
                                <Reveal class={classes!("step-card")}>
                                    <div class="step-number">{number}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </Reveal>
                            })
                        }
                    </div>
                </Reveal>
            </section>

            <section class="team-section" id="team">
                <h2>{"Meet the party"}</h2>
                {
                    match &*roster {
                        Ok(roster) => html! {
                            <Reveal class={classes!("team-track-wrapper")}>
                                <TeamCarousel roster={roster.clone()} />
                            </Reveal>
                        },
                        Err(_) => html! {},
                    }
                }
            </section>

            <section class="cta-section">
                <h2>{"Ready to press start?"}</h2>
                <p>{"Join the waitlist and be first in line when the beta opens."}</p>
                <CtaButton class={classes!("btn-cta-large")}>{"Join the beta"}</CtaButton>
            </section>

            <footer class="footer">
                <p>{"© Ludera. Learning that plays back."}</p>
            </footer>

            <VideoModal open={*video_open} on_close={close_video} />
        </div>
    }
}

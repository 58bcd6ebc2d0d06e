use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod pages;
mod utils;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This level doesn't exist yet."}</p>
                <Link<Route> to={Route::Landing}>{"Back to start"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting Ludera landing page");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod controller;
mod error;
mod components {
    pub mod cyber_terminal;
    pub mod fallback_image;
    pub mod header;
    pub mod matrix_canvas;
    pub mod preview_carousel;
    pub mod purchase_modal;
    pub mod stat_counter;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod dom;
    pub mod scheduler;
}
mod widgets;

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
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
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="glitch" data-text="404">{"404"}</h1>
            <p>{"Signal lost. This page does not exist."}</p>
            <Link<Route> to={Route::Landing} classes="cyber-btn">
                {"Back to base"}
            </Link<Route>>
        </div>
    }
}

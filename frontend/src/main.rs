use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod components;
mod config;
mod content;
mod pages;
mod utils;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => match content::landing() {
            Ok(content) => html! { <Landing content={content.clone()} /> },
            Err(e) => {
                gloo_console::error!(format!("Landing content unavailable: {}", e));
                html! { <div class="landing-page"></div> }
            }
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
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
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Rendering Producer landing page");
    yew::Renderer::<App>::new().render();
}

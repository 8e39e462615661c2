use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod data;
mod models;
mod scroll;

mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod hero_carousel;
    pub mod navigation;
    pub mod project_card;
    pub mod project_carousel;
    pub mod project_overlay;
    pub mod reveal;
}

mod pages {
    pub mod about;
    pub mod home;
    pub mod projects;
}

use components::footer::Footer;
use components::navigation::Navigation;
use pages::{about::About, home::Home, projects::Projects};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navigation />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

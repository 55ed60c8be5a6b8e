use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod dom;
mod hooks;
mod navigation;
mod schedule;
mod scroll_spy;
mod form {
    pub mod elements;
    pub mod state;
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod header;
    pub mod inquiry_form;
    pub mod page_link;
}
mod pages {
    pub mod home;
}

use components::header::Header;
use pages::home::Home;


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
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            warn!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod countdown;
mod theme;
mod registration {
    pub mod plan;
    pub mod model;
    pub mod validate;
    pub mod pipeline;
    pub mod state;
}
mod services {
    pub mod storage;
    pub mod firestore;
    pub mod analytics;
}
mod components {
    pub mod reveal;
    pub mod toast;
    pub mod nav;
    pub mod confirmation;
}
mod pages {
    pub mod landing;
    pub mod pricing;
    pub mod registration;
    pub mod legal;
    pub mod contact;
}

use countdown::CountdownProvider;
use pages::{
    contact::Contact,
    landing::Landing,
    legal::{NotFound, Privacy, Refund, Terms},
};
use services::storage::LocalStorage;
use theme::{Theme, ThemeContext};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/refund")]
    Refund,
    #[at("/refunds")]
    Refunds,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        },
        Route::Refund | Route::Refunds => {
            info!("Rendering Refund page");
            html! { <Refund /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let theme = use_state(|| Theme::load(&LocalStorage));

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            next.save(&LocalStorage);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            <CountdownProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </CountdownProvider>
        </ContextProvider<ThemeContext>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting FYT LYF");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;

mod api_client;
mod components;
mod pages;
pub mod hooks;
pub mod settings;

use components::common::toast::ToastProvider;
use components::layout::layout::Layout;
use pages::investor_detail::InvestorDetailPage;
use pages::investors::InvestorsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Investors,
    #[at("/investor/:id")]
    InvestorDetail { id: i32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Investors => {
            log::trace!("Rendering investors list page");
            html! { <InvestorsPage /> }
        }
        Route::InvestorDetail { id } => {
            log::trace!("Rendering investor detail page for ID: {}", id);
            html! { <InvestorDetailPage id={id} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings first so the logger picks up the configured level.
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Investors Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

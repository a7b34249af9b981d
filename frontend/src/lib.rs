use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use shared::View;
use crate::components::common_toast::ToastProvider;
use crate::components::game_viewer::{GameViewer, ViewerProvider};
use crate::components::nav::Nav;
use crate::components::stats_panel::StatsPanel;
use crate::library::LibraryProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod export;
pub mod library;
pub mod pages {
    pub mod admin;
    pub mod featured;
    pub mod library;
    pub mod not_found;
}

use pages::{admin::AdminPage, featured::Featured, library::LibraryPage, not_found::NotFound};

#[cfg(all(test, target_arch = "wasm32"))]
mod export_test;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Library,
    #[at("/featured")]
    Featured,
    #[at("/stats")]
    Stats,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The screen this route selects, if any.
    pub fn view(&self) -> Option<View> {
        match self {
            Route::Library => Some(View::Library),
            Route::Featured => Some(View::Featured),
            Route::Stats => Some(View::Stats),
            Route::Admin => Some(View::Admin),
            Route::NotFound => None,
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Library => Route::Library,
            View::Featured => Route::Featured,
            View::Stats => Route::Stats,
            View::Admin => Route::Admin,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <LibraryProvider>
                <ViewerProvider>
                    <BrowserRouter>
                        <div class="app-container min-h-screen flex flex-col bg-gray-50">
                            <Nav />
                            <main class="flex-1">
                                <Switch<Route> render={switch} />
                            </main>
                            <GameViewer />
                        </div>
                    </BrowserRouter>
                </ViewerProvider>
            </LibraryProvider>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Library => html! { <LibraryPage /> },
        Route::Featured => html! { <Featured /> },
        Route::Stats => html! {
            <div class="max-w-3xl mx-auto py-6 px-4">
                <StatsPanel />
            </div>
        },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}

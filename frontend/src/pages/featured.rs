use shared::View;
use yew::prelude::*;

use crate::components::game_viewer::ViewerContext;
use crate::library::LibraryContext;

#[function_component(Featured)]
pub fn featured() -> Html {
    let Some(library) = use_context::<LibraryContext>() else {
        return html! {};
    };
    let viewer = use_context::<ViewerContext>();
    let featured = View::Featured.visible(library.state.library.games());

    html! {
        <div class="featured max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
            <h2 class="text-2xl font-bold text-gray-900 mb-4">{"Destacados"}</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {for featured.iter().map(|game| {
                    let on_play = {
                        let url = game.url.clone();
                        let viewer = viewer.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(viewer) = &viewer {
                                viewer.open.emit(url.clone());
                            }
                        })
                    };
                    html! {
                        <div key={game.id.clone()} class="feat bg-white shadow rounded-lg overflow-hidden">
                            <img src={game.cover.clone()} alt="" class="w-full h-40 object-cover" />
                            <div class="title p-3 font-medium text-gray-900">{&game.title}</div>
                            <div class="px-3 pb-3">
                                <button onclick={on_play} class="px-3 py-1 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700">
                                    {"Jugar"}
                                </button>
                            </div>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

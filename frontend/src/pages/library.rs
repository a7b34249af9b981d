use shared::View;
use yew::prelude::*;

use crate::components::game_card::GameCard;
use crate::components::stats_panel::StatsPanel;
use crate::library::LibraryContext;

#[function_component(LibraryPage)]
pub fn library_page() -> Html {
    let Some(library) = use_context::<LibraryContext>() else {
        return html! {};
    };
    let games = View::Library.visible(library.state.library.games());

    html! {
        <div class="layout max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="list lg:col-span-2 space-y-4">
                if library.state.loading {
                    <p class="text-gray-500">{"Cargando juegos..."}</p>
                } else if games.is_empty() {
                    <p class="text-gray-500">{"No hay juegos en la biblioteca."}</p>
                }
                {for games.iter().map(|game| html! {
                    <GameCard key={game.id.clone()} game={game.clone()} />
                })}
            </div>
            <aside class="aside">
                <StatsPanel />
            </aside>
        </div>
    }
}

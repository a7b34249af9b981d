use shared::GameRecord;
use yew::prelude::*;

use crate::components::game_viewer::ViewerContext;
use crate::library::LibraryContext;

#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: GameRecord,
}

pub fn completion_label(completed: bool) -> &'static str {
    if completed {
        "No completado"
    } else {
        "Marcar completado"
    }
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let library = use_context::<LibraryContext>();
    let viewer = use_context::<ViewerContext>();
    let game = &props.game;

    let on_play = {
        let url = game.url.clone();
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(viewer) = &viewer {
                viewer.open.emit(url.clone());
            }
        })
    };

    let on_toggle = {
        let id = game.id.clone();
        let library = library.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(library) = &library {
                library.toggle_completed.emit(id.clone());
            }
        })
    };

    let on_delete = {
        let id = game.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(library) = &library {
                library.delete.emit(id.clone());
            }
        })
    };

    html! {
        <div class="card bg-white shadow rounded-lg overflow-hidden flex">
            <div class="thumb w-32 h-32 flex-shrink-0 flex items-center justify-center bg-gray-100 text-gray-400 text-sm">
                if game.cover.is_empty() {
                    {"No image"}
                } else {
                    <img src={game.cover.clone()} alt="" class="w-full h-full object-cover" />
                }
            </div>
            <div class="info flex-1 p-4">
                <h3 class="text-lg font-semibold text-gray-900">{&game.title}</h3>
                <p class="muted text-sm text-gray-500">{format!("{} • {}", game.genre, game.personality)}</p>
                <div class="actions mt-3 flex flex-wrap gap-2">
                    <button onclick={on_play} class="px-3 py-1 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700">
                        {"Jugar"}
                    </button>
                    <button onclick={on_toggle} class="px-3 py-1 text-sm rounded-md bg-gray-200 text-gray-800 hover:bg-gray-300">
                        {completion_label(game.completed)}
                    </button>
                    <button onclick={on_delete} class="px-3 py-1 text-sm rounded-md bg-red-100 text-red-700 hover:bg-red-200">
                        {"Eliminar"}
                    </button>
                </div>
            </div>
        </div>
    }
}

use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::common_toast::{Toast, ToastContext};
use crate::export::{export_json, export_pdf, STATS_ELEMENT_ID};
use crate::library::LibraryContext;

/// Aggregate statistics for the current library, with export buttons.
#[function_component(StatsPanel)]
pub fn stats_panel() -> Html {
    let Some(library) = use_context::<LibraryContext>() else {
        return html! {};
    };
    let toasts = use_context::<ToastContext>();
    let stats = library.state.library.stats();

    let on_export_json = {
        let stats = stats.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = export_json(&stats) {
                error!("JSON export failed: {}", e);
                if let Some(toasts) = &toasts {
                    toasts.show(Toast::error(format!("No se pudo exportar JSON: {}", e)));
                }
            }
        })
    };

    let on_export_pdf = Callback::from(move |_: MouseEvent| {
        let toasts = toasts.clone();
        spawn_local(async move {
            if let Err(e) = export_pdf().await {
                error!("PDF export failed: {}", e);
                if let Some(toasts) = &toasts {
                    toasts.show(Toast::error(format!("No se pudo exportar PDF: {}", e)));
                }
            }
        });
    });

    html! {
        <div id={STATS_ELEMENT_ID} class="panel bg-white shadow rounded-lg p-6">
            <h3 class="text-xl font-semibold text-gray-900 mb-4">{"Panel de Estadísticas"}</h3>
            <div class="grid grid-cols-2 gap-2 text-sm">
                <div>{"Juegos: "}<strong>{stats.total.to_string()}</strong></div>
                <div>{"Horas: "}<strong>{stats.hours.to_string()}</strong></div>
                <div>{"Promedio: "}<strong>{&stats.average_score}</strong></div>
                <div>{"Completados: "}<strong>{stats.completed.to_string()}</strong></div>
            </div>
            <div class="mt-4">
                <h4 class="font-medium text-gray-800">{"Juegos por personalidad"}</h4>
                {for stats.per_personality.iter().map(|entry| html! {
                    <div key={entry.personality.clone()} class="text-sm text-gray-600">
                        {format!("{}: {}", entry.personality, entry.count)}
                    </div>
                })}
            </div>
            <div class="mt-4">
                <h4 class="font-medium text-gray-800">{"Top por horas"}</h4>
                <ol class="list-decimal list-inside text-sm text-gray-600">
                    {for stats.top_by_hours.iter().map(|game| html! {
                        <li key={game.id.clone()}>{format!("{} — {} h", game.title, game.hours)}</li>
                    })}
                </ol>
            </div>
            <div class="mt-4 flex gap-2">
                <button onclick={on_export_json} class="px-3 py-1 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700">
                    {"Exportar JSON"}
                </button>
                <button onclick={on_export_pdf} class="px-3 py-1 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700">
                    {"Exportar PDF"}
                </button>
            </div>
        </div>
    }
}

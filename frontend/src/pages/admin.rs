use log::debug;
use shared::{AdminGate, LibraryError, NewGame};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::common_toast::{Toast, ToastContext};
use crate::config::Config;
use crate::library::LibraryContext;

/// Form fields of the add-game form.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Field {
    Title,
    Genre,
    Personality,
    Cover,
    Url,
}

fn set_field(draft: &mut NewGame, field: Field, value: String) {
    match field {
        Field::Title => draft.title = value,
        Field::Genre => draft.genre = value,
        Field::Personality => draft.personality = value,
        Field::Cover => draft.cover = value,
        Field::Url => draft.url = value,
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500";
const BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700";

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let gate = use_state(|| AdminGate::new(Config::admin_secret()));
    let draft = use_state(NewGame::default);
    let library = use_context::<LibraryContext>();
    let toasts = use_context::<ToastContext>();

    if !gate.is_authenticated() {
        let on_password = {
            let gate = gate.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*gate).clone();
                next.set_entered(input.value());
                gate.set(next);
            })
        };

        let on_login = {
            let gate = gate.clone();
            let toasts = toasts.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                let mut next = (*gate).clone();
                if next.submit().is_err() {
                    if let Some(toasts) = &toasts {
                        toasts.show(Toast::error("Contraseña incorrecta"));
                    }
                }
                gate.set(next);
            })
        };

        return html! {
            <div class="panel max-w-md mx-auto mt-8 bg-white shadow rounded-lg p-6">
                <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Login Admin"}</h3>
                <form onsubmit={on_login} class="space-y-3">
                    <input
                        type="password"
                        placeholder="Contraseña"
                        value={gate.entered().to_string()}
                        oninput={on_password}
                        class={INPUT_CLASS}
                    />
                    <button type="submit" class={BUTTON_CLASS}>{"Entrar"}</button>
                </form>
            </div>
        };
    }

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set_field(&mut next, field, input.value());
            draft.set(next);
        })
    };

    let on_personality = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            set_field(&mut next, Field::Personality, select.value());
            draft.set(next);
        })
    };

    let on_add = {
        let draft = draft.clone();
        let library = library.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(library) = &library else { return };
            let show = |toast: Toast| {
                if let Some(toasts) = &toasts {
                    toasts.show(toast);
                }
            };
            match library.add_local((*draft).clone()) {
                Ok(record) => {
                    draft.set(NewGame::default());
                    show(Toast::success(format!("Juego \"{}\" agregado", record.title)));
                }
                Err(LibraryError::Validation(errors)) => {
                    debug!("Rejected local game: {}", errors);
                    show(Toast::error("Titulo y URL obligatorios"));
                }
                Err(e) => show(Toast::error(e.to_string())),
            }
        })
    };

    let personalities = library
        .as_ref()
        .map(|l| l.state.library.catalog().personalities.clone())
        .unwrap_or_default();

    html! {
        <div class="panel max-w-lg mx-auto mt-8 bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-gray-900 mb-4">{"Admin - Agregar juego"}</h3>
            <form onsubmit={on_add} class="space-y-3">
                <input placeholder="Título" value={draft.title.clone()} oninput={on_input(Field::Title)} class={INPUT_CLASS} />
                <input placeholder="Género" value={draft.genre.clone()} oninput={on_input(Field::Genre)} class={INPUT_CLASS} />
                <select onchange={on_personality} class={INPUT_CLASS}>
                    <option value="" selected={draft.personality.is_empty()}>{"Personalidad"}</option>
                    {for personalities.iter().map(|p| html! {
                        <option key={p.clone()} value={p.clone()} selected={draft.personality == *p}>{p.clone()}</option>
                    })}
                </select>
                <input placeholder="URL portada" value={draft.cover.clone()} oninput={on_input(Field::Cover)} class={INPUT_CLASS} />
                <input placeholder="URL del juego" value={draft.url.clone()} oninput={on_input(Field::Url)} class={INPUT_CLASS} />
                <button type="submit" class={BUTTON_CLASS}>{"Agregar local"}</button>
            </form>
            <p class="mt-4 text-xs text-gray-400">
                {"Los juegos agregados aquí sólo existen en este navegador."}
            </p>
        </div>
    }
}

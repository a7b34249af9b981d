use std::rc::Rc;

use log::{debug, error, warn};
use shared::library::sync;
use shared::{Catalog, Change, Confirm, Fallback, GameRecord, Library, LibraryError, NewGame};
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::games::HttpGameService;
use crate::components::common_toast::{Toast, ToastContext};

#[derive(Clone, Debug, PartialEq)]
pub struct LibraryState {
    pub library: Library,
    pub loading: bool,
}

impl LibraryState {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            library: Library::new(catalog),
            loading: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LibraryAction {
    Apply(Change),
    InsertLocal(GameRecord),
}

impl Reducible for LibraryState {
    type Action = LibraryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut library = self.library.clone();
        let outcome = match action {
            LibraryAction::Apply(change) => library.apply(change),
            LibraryAction::InsertLocal(record) => match library.insert_local(record) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Local game not inserted: {}", e);
                    return self;
                }
            },
        };
        debug!("Library updated: {:?}", outcome);
        Rc::new(Self {
            library,
            loading: false,
        })
    }
}

/// Confirmation through the browser's `window.confirm`.
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        gloo::dialogs::confirm(prompt)
    }
}

#[derive(Clone, PartialEq)]
pub struct LibraryContext {
    pub state: LibraryState,
    pub toggle_completed: Callback<String>,
    pub delete: Callback<String>,
    pub insert_local: Callback<GameRecord>,
}

impl LibraryContext {
    /// Validates the draft and adds it as a local-only game.
    ///
    /// Returns the stored record once the current collection accepted it.
    pub fn add_local(&self, draft: NewGame) -> Result<GameRecord, LibraryError> {
        let mut library = self.state.library.clone();
        let record = library.add_local(draft)?.clone();
        self.insert_local.emit(record.clone());
        Ok(record)
    }
}

#[derive(Properties, PartialEq)]
pub struct LibraryProviderProps {
    pub children: Children,
}

fn builtin_catalog() -> Catalog {
    Catalog::builtin().unwrap_or_else(|e| {
        error!("Built-in catalog is invalid: {}", e);
        Catalog {
            personalities: Vec::new(),
            seed: Vec::new(),
        }
    })
}

fn notify_error(toasts: Option<&ToastContext>, e: &LibraryError) {
    error!("Library operation failed: {}", e);
    if let Some(toasts) = toasts {
        toasts.show(Toast::error(e.to_string()));
    }
}

/// Tells the user when a change did not reach the backend.
fn notify_fallback(toasts: Option<&ToastContext>, change: &Change) {
    let Some(toasts) = toasts else { return };
    match change.fallback() {
        Some(Fallback::Seeded(_)) => {
            toasts.show(Toast::info("Servidor no disponible: mostrando la colección de ejemplo"))
        }
        Some(Fallback::Remote(_)) => {
            toasts.show(Toast::warning("Cambios guardados sólo localmente"))
        }
        Some(Fallback::LocalOnly) | None => {}
    }
}

#[function_component(LibraryProvider)]
pub fn library_provider(props: &LibraryProviderProps) -> Html {
    let toasts = use_context::<ToastContext>();
    let catalog = use_memo((), |_| builtin_catalog());
    let service = use_memo((), |_| HttpGameService::from_config());
    let state = {
        let catalog = catalog.clone();
        use_reducer_eq(move || LibraryState::new(catalog))
    };

    {
        let state = state.clone();
        let service = service.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let change = sync::load(service.as_ref()).await;
                notify_fallback(toasts.as_ref(), &change);
                state.dispatch(LibraryAction::Apply(change));
            });
            || ()
        });
    }

    let toggle_completed = {
        let state = state.clone();
        let service = service.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let state = state.clone();
            let service = service.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match sync::toggle_completed(service.as_ref(), &state.library, &id).await {
                    Ok(change) => {
                        notify_fallback(toasts.as_ref(), &change);
                        state.dispatch(LibraryAction::Apply(change));
                    }
                    Err(e) => notify_error(toasts.as_ref(), &e),
                }
            });
        })
    };

    let delete = {
        let state = state.clone();
        let service = service.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let state = state.clone();
            let service = service.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match sync::delete(service.as_ref(), &state.library, &id, &BrowserConfirm).await {
                    Ok(change) => {
                        notify_fallback(toasts.as_ref(), &change);
                        state.dispatch(LibraryAction::Apply(change));
                    }
                    Err(e) => notify_error(toasts.as_ref(), &e),
                }
            });
        })
    };

    let insert_local = {
        let state = state.clone();
        Callback::from(move |record: GameRecord| {
            debug!("Inserting local game {}", record.id);
            state.dispatch(LibraryAction::InsertLocal(record));
        })
    };

    let context = LibraryContext {
        state: (*state).clone(),
        toggle_completed,
        delete,
        insert_local,
    };

    html! {
        <ContextProvider<LibraryContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LibraryContext>>
    }
}

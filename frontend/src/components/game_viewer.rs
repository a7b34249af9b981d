use log::debug;
use yew::prelude::*;

/// The game currently open in the embedded player.
#[derive(Clone, PartialEq)]
pub struct ViewerContext {
    pub url: Option<String>,
    pub open: Callback<String>,
    pub close: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ViewerProviderProps {
    pub children: Children,
}

#[function_component(ViewerProvider)]
pub fn viewer_provider(props: &ViewerProviderProps) -> Html {
    let url = use_state(|| None::<String>);

    let open = {
        let url = url.clone();
        Callback::from(move |game_url: String| {
            debug!("Opening game {}", game_url);
            url.set(Some(game_url));
        })
    };

    let close = {
        let url = url.clone();
        Callback::from(move |_| url.set(None))
    };

    let context = ViewerContext {
        url: (*url).clone(),
        open,
        close,
    };

    html! {
        <ContextProvider<ViewerContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ViewerContext>>
    }
}

/// Overlay with the game loaded in an iframe. Renders nothing when closed.
#[function_component(GameViewer)]
pub fn game_viewer() -> Html {
    let Some(viewer) = use_context::<ViewerContext>() else {
        return html! {};
    };
    let Some(url) = viewer.url.clone() else {
        return html! {};
    };

    let on_close = {
        let close = viewer.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div class="viewer fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-75">
            <div class="viewer-inner relative w-11/12 h-5/6 bg-white rounded-lg shadow-xl p-2">
                <button
                    onclick={on_close}
                    class="close absolute top-2 right-2 px-3 py-1 text-sm font-medium text-white bg-red-600 rounded-md hover:bg-red-700"
                >
                    {"Cerrar"}
                </button>
                <iframe src={url} title="game" class="game-frame w-full h-full rounded"></iframe>
            </div>
        </div>
    }
}

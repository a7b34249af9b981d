use shared::View;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_view = use_route::<Route>().and_then(|route| route.view());

    html! {
        <header class={classes!(
            "header", "sticky", "top-0", "z-30", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "py-3", "flex", "justify-between", "items-center")}>
                <div>
                    <h1 class="text-xl font-bold">{"GameTracker PRO"}</h1>
                    <div class="muted text-sm text-white/80">{"Biblioteca por personalidad"}</div>
                </div>
                <nav class="flex space-x-2">
                    {for View::ALL.iter().map(|view| {
                        let route = Route::from(*view);
                        let active = current_view == Some(*view);
                        html! {
                            <Link<Route>
                                to={route}
                                classes={classes!(
                                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                    "transition-colors", "duration-200",
                                    if active {
                                        classes!("bg-white/20", "text-white")
                                    } else {
                                        classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                                    }
                                )}
                            >
                                {view.label()}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}

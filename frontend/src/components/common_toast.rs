use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Warning => "bg-yellow-500 border-yellow-600",
            ToastType::Info => "bg-blue-500 border-blue-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: DEFAULT_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn show(&self, toast: Toast) {
        self.add_toast.emit(toast);
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

#[derive(Clone, Default, PartialEq)]
struct ToastList(Vec<Toast>);

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        std::rc::Rc::new(ToastList(toasts))
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let remove_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            toasts.dispatch(ToastAction::Add(toast));

            let toasts = toasts.clone();
            Timeout::new(duration, move || toasts.dispatch(ToastAction::Remove(toast_id))).forget();
        })
    };

    let context = ToastContext {
        toasts: toasts.0.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastStack />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let Some(toast_context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {for toast_context.toasts.iter().map(|toast| {
                let on_close = {
                    let remove_toast = toast_context.remove_toast.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| remove_toast.emit(id))
                };
                html! {
                    <div
                        key={toast.id.to_string()}
                        class={classes!(
                            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
                            "text-white", "min-w-80", "max-w-md", toast.toast_type.classes()
                        )}
                    >
                        <span class="text-lg font-bold mr-3">{toast.toast_type.icon()}</span>
                        <p class="flex-1 text-sm font-medium">{&toast.message}</p>
                        <button onclick={on_close} class="ml-3 text-white hover:text-gray-200">
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

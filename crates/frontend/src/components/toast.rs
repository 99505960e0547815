//! Toast notifications
//!
//! A context-backed queue of transient messages. Each toast dismisses itself
//! after [`AppConfig::TOAST_DISMISS_MS`] or when clicked.

use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue state
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

/// Toast queue actions
pub enum ToastAction {
    Success(String),
    Error(String),
    Dismiss(u64),
}

/// Toast context
pub type ToastContext = UseReducerHandle<ToastState>;

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Success(message) => {
                toasts.push(Toast {
                    id: next_id,
                    level: ToastLevel::Success,
                    message,
                });
                next_id += 1;
            }
            ToastAction::Error(message) => {
                toasts.push(Toast {
                    id: next_id,
                    level: ToastLevel::Error,
                    message,
                });
                next_id += 1;
            }
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts, next_id })
    }
}

/// Toast provider props
#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Toast provider component
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state}>
            {props.children.clone()}
            <ToastViewport />
        </ContextProvider<ToastContext>>
    }
}

/// Hook to use the toast context
#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider")
}

#[function_component(ToastViewport)]
fn toast_viewport() -> Html {
    let toasts = use_toasts();

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2">
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toasts = use_toasts();
    let id = props.toast.id;

    // Auto-dismiss; dropping the timeout on unmount cancels it
    {
        let toasts = toasts.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(AppConfig::TOAST_DISMISS_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            });
            move || drop(timeout)
        });
    }

    let onclick = {
        let toasts = toasts.clone();
        Callback::from(move |_| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let class = match props.toast.level {
        ToastLevel::Success => "cursor-pointer rounded-lg bg-green-600 px-4 py-3 text-sm text-white shadow-lg",
        ToastLevel::Error => "cursor-pointer rounded-lg bg-red-600 px-4 py-3 text-sm text-white shadow-lg",
    };

    html! {
        <div {class} {onclick} role="alert">
            {&props.toast.message}
        </div>
    }
}

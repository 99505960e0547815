//! Dashboard: list, search, filter, toggle, and delete todos

use crate::components::toast::{use_toasts, ToastAction};
use crate::components::{Spinner, TodoCard};
use crate::routes::Route;
use crate::services::todos::{TodoApiService, UpdateTodoRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let toasts = use_toasts();
    let todos = use_state(|| None::<Vec<crate::services::todos::Todo>>);
    let search = use_state(String::new);
    let filter = use_state(|| Filter::All);

    // Fetch once on mount
    {
        let todos = todos.clone();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match TodoApiService::get_all().await {
                    Ok(list) => todos.set(Some(list)),
                    Err(err) => {
                        toasts.dispatch(ToastAction::Error(err.to_string()));
                        todos.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_toggle = {
        let todos = todos.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let Some(list) = (*todos).clone() else {
                return;
            };
            let Some(current) = list.iter().find(|t| t.id == id) else {
                return;
            };
            let request = UpdateTodoRequest {
                completed: Some(!current.completed),
                ..Default::default()
            };
            let todos = todos.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match TodoApiService::update(&id, &request).await {
                    Ok(updated) => {
                        let next = list
                            .into_iter()
                            .map(|t| if t.id == id { updated.clone() } else { t })
                            .collect();
                        todos.set(Some(next));
                    }
                    Err(err) => toasts.dispatch(ToastAction::Error(err.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let todos = todos.clone();
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let Some(list) = (*todos).clone() else {
                return;
            };
            let todos = todos.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match TodoApiService::delete(&id).await {
                    Ok(()) => {
                        todos.set(Some(list.into_iter().filter(|t| t.id != id).collect()));
                        toasts.dispatch(ToastAction::Success("Todo deleted.".to_string()));
                    }
                    Err(err) => toasts.dispatch(ToastAction::Error(err.to_string())),
                }
            });
        })
    };

    let body = match &*todos {
        None => html! { <Spinner text={Some("Loading todos...".to_string())} /> },
        Some(list) => {
            let query = search.to_lowercase();
            let visible: Vec<_> = list
                .iter()
                .filter(|t| match *filter {
                    Filter::All => true,
                    Filter::Active => !t.completed,
                    Filter::Completed => t.completed,
                })
                .filter(|t| {
                    query.is_empty()
                        || t.title.to_lowercase().contains(&query)
                        || t.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&query))
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                html! {
                    <p class="py-12 text-center text-gray-500">
                        { if list.is_empty() { "No todos yet. Create your first one!" } else { "No todos match." } }
                    </p>
                }
            } else {
                html! {
                    <div class="space-y-3">
                        { for visible.into_iter().map(|todo| html! {
                            <TodoCard
                                key={todo.id.clone()}
                                todo={todo.clone()}
                                on_toggle={on_toggle.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }) }
                    </div>
                }
            }
        }
    };

    html! {
        <div class="mx-auto max-w-3xl py-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Your todos"}</h1>
                <Link<Route> to={Route::TodoCreate} classes="rounded-md bg-indigo-600 px-4 py-2 text-sm text-white hover:bg-indigo-700">
                    {"New todo"}
                </Link<Route>>
            </div>
            <div class="mt-4 flex items-center gap-3">
                <input
                    type="search"
                    placeholder="Search todos..."
                    value={(*search).clone()}
                    oninput={on_search}
                    class="w-full rounded-md border border-gray-300 px-3 py-2"
                />
                <div class="flex gap-1">
                    { for [Filter::All, Filter::Active, Filter::Completed].into_iter().map(|f| {
                        let filter = filter.clone();
                        let active = *filter == f;
                        let class = if active {
                            "rounded-md bg-indigo-600 px-3 py-2 text-sm text-white"
                        } else {
                            "rounded-md border border-gray-300 px-3 py-2 text-sm text-gray-700 hover:bg-gray-50"
                        };
                        let onclick = Callback::from(move |_| filter.set(f));
                        html! { <button {class} {onclick}>{f.label()}</button> }
                    }) }
                </div>
            </div>
            <div class="mt-6">
                {body}
            </div>
        </div>
    }
}

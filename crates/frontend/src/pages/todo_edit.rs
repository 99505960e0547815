//! Edit-todo page

use crate::components::toast::{use_toasts, ToastAction};
use crate::components::Spinner;
use crate::pages::non_empty;
use crate::routes::Route;
use crate::services::todos::{Todo, TodoApiService, UpdateTodoRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodoEditPageProps {
    pub id: String,
}

#[function_component(TodoEditPage)]
pub fn todo_edit_page(props: &TodoEditPageProps) -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("TodoEditPage must be rendered inside a Router");

    let loaded = use_state(|| None::<Todo>);
    let title = use_state(String::new);
    let description = use_state(String::new);
    let completed = use_state(|| false);
    let busy = use_state(|| false);

    // Load the todo when the id changes
    {
        let loaded = loaded.clone();
        let title = title.clone();
        let description = description.clone();
        let completed = completed.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match TodoApiService::get(&id).await {
                    Ok(todo) => {
                        title.set(todo.title.clone());
                        description.set(todo.description.clone().unwrap_or_default());
                        completed.set(todo.completed);
                        loaded.set(Some(todo));
                    }
                    Err(err) => {
                        toasts.dispatch(ToastAction::Error(err.to_string()));
                        navigator.push(&Route::Dashboard);
                    }
                }
            });
            || ()
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_completed = {
        let completed = completed.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            completed.set(input.checked());
        })
    };

    let onsubmit = {
        let id = props.id.clone();
        let title = title.clone();
        let description = description.clone();
        let completed = completed.clone();
        let busy = busy.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(new_title) = non_empty(&title) else {
                toasts.dispatch(ToastAction::Error("Title is required.".to_string()));
                return;
            };
            let request = UpdateTodoRequest {
                title: Some(new_title),
                description: Some(non_empty(&description).unwrap_or_default()),
                completed: Some(*completed),
            };
            busy.set(true);
            let id = id.clone();
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match TodoApiService::update(&id, &request).await {
                    Ok(_) => {
                        toasts.dispatch(ToastAction::Success("Todo updated.".to_string()));
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        toasts.dispatch(ToastAction::Error(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    if loaded.is_none() {
        return html! { <Spinner text={Some("Loading todo...".to_string())} /> };
    }

    html! {
        <div class="mx-auto max-w-md py-12">
            <h1 class="text-2xl font-bold text-gray-900">{"Edit todo"}</h1>
            <form {onsubmit} class="mt-6 space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Title"}</label>
                    <input
                        type="text"
                        required=true
                        value={(*title).clone()}
                        oninput={on_title}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Description"}</label>
                    <textarea
                        rows="3"
                        value={(*description).clone()}
                        oninput={on_description}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <label class="flex items-center gap-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        checked={*completed}
                        onchange={on_completed}
                        class="h-4 w-4 rounded border-gray-300 text-indigo-600"
                    />
                    {"Completed"}
                </label>
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 disabled:opacity-50"
                >
                    { if *busy { "Saving..." } else { "Save" } }
                </button>
            </form>
        </div>
    }
}

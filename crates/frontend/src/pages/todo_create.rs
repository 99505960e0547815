//! Create-todo page

use crate::components::toast::{use_toasts, ToastAction};
use crate::pages::non_empty;
use crate::routes::Route;
use crate::services::todos::{CreateTodoRequest, TodoApiService};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(TodoCreatePage)]
pub fn todo_create_page() -> Html {
    let toasts = use_toasts();
    let navigator = use_navigator().expect("TodoCreatePage must be rendered inside a Router");

    let title = use_state(String::new);
    let description = use_state(String::new);
    let busy = use_state(|| false);

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

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(title) = non_empty(&title) else {
                toasts.dispatch(ToastAction::Error("Title is required.".to_string()));
                return;
            };
            let request = CreateTodoRequest {
                title,
                description: non_empty(&description),
            };
            busy.set(true);
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match TodoApiService::create(&request).await {
                    Ok(_) => {
                        toasts.dispatch(ToastAction::Success("Todo created.".to_string()));
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

    html! {
        <div class="mx-auto max-w-md py-12">
            <h1 class="text-2xl font-bold text-gray-900">{"New todo"}</h1>
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
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 disabled:opacity-50"
                >
                    { if *busy { "Creating..." } else { "Create" } }
                </button>
            </form>
        </div>
    }
}

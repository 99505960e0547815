//! Single todo card

use crate::routes::Route;
use crate::services::todos::Todo;
use yew::prelude::*;
use yew_router::prelude::*;

/// Todo card properties
#[derive(Properties, PartialEq)]
pub struct TodoCardProps {
    pub todo: Todo,
    /// Fired with the todo id when the completion checkbox is toggled
    pub on_toggle: Callback<String>,
    /// Fired with the todo id when the delete button is pressed
    pub on_delete: Callback<String>,
}

/// Card showing one todo with toggle, edit, and delete controls
#[function_component(TodoCard)]
pub fn todo_card(props: &TodoCardProps) -> Html {
    let todo = &props.todo;

    let on_toggle = {
        let cb = props.on_toggle.clone();
        let id = todo.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let on_delete = {
        let cb = props.on_delete.clone();
        let id = todo.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };

    let title_class = if todo.completed {
        "font-medium text-gray-400 line-through"
    } else {
        "font-medium text-gray-900"
    };

    html! {
        <div class="flex items-start justify-between rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <div class="flex items-start gap-3">
                <input
                    type="checkbox"
                    checked={todo.completed}
                    onchange={on_toggle}
                    class="mt-1 h-4 w-4 rounded border-gray-300 text-indigo-600"
                />
                <div>
                    <p class={title_class}>{&todo.title}</p>
                    if let Some(description) = &todo.description {
                        <p class="mt-1 text-sm text-gray-500">{description}</p>
                    }
                    <p class="mt-1 text-xs text-gray-400">
                        {format!("Created {}", todo.created_at.format("%Y-%m-%d"))}
                    </p>
                </div>
            </div>
            <div class="flex items-center gap-2 text-sm">
                <Link<Route>
                    to={Route::TodoEdit { id: todo.id.clone() }}
                    classes="text-indigo-600 hover:text-indigo-800"
                >
                    {"Edit"}
                </Link<Route>>
                <button onclick={on_delete} class="text-red-600 hover:text-red-800">
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}

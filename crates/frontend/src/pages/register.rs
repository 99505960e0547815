//! Registration page

use crate::auth::{register, use_auth};
use crate::components::toast::use_toasts;
use crate::routes::Route;
use tick_client::types::RegisterRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("RegisterPage must be rendered inside a Router");

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    }

    let onsubmit = {
        let auth = auth.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                first_name: crate::pages::non_empty(&first_name),
                last_name: crate::pages::non_empty(&last_name),
            };
            register(auth.clone(), toasts.clone(), navigator.clone(), request);
        })
    };

    let busy = auth.is_loading();

    html! {
        <div class="mx-auto max-w-md py-12">
            <h1 class="text-2xl font-bold text-gray-900">{"Create an account"}</h1>
            <form {onsubmit} class="mt-6 space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"First name"}</label>
                        <input
                            type="text"
                            required=true
                            value={(*first_name).clone()}
                            oninput={bind(&first_name)}
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Last name"}</label>
                        <input
                            type="text"
                            required=true
                            value={(*last_name).clone()}
                            oninput={bind(&last_name)}
                            class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                    <input
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={bind(&email)}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                    <input
                        type="password"
                        required=true
                        minlength="8"
                        value={(*password).clone()}
                        oninput={bind(&password)}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <button
                    type="submit"
                    disabled={busy}
                    class="w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 disabled:opacity-50"
                >
                    { if busy { "Creating account..." } else { "Register" } }
                </button>
            </form>
            <p class="mt-4 text-sm text-gray-600">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-indigo-600 hover:text-indigo-800">
                    {"Sign in"}
                </Link<Route>>
            </p>
        </div>
    }
}

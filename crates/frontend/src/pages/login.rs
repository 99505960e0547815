//! Login page

use crate::auth::{login, use_auth};
use crate::components::toast::use_toasts;
use crate::routes::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("LoginPage must be rendered inside a Router");

    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login(
                auth.clone(),
                toasts.clone(),
                navigator.clone(),
                (*email).clone(),
                (*password).clone(),
            );
        })
    };

    let busy = auth.is_loading();

    html! {
        <div class="mx-auto max-w-md py-12">
            <h1 class="text-2xl font-bold text-gray-900">{"Sign in"}</h1>
            <form {onsubmit} class="mt-6 space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                    <input
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                    <input
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        class="mt-1 w-full rounded-md border border-gray-300 px-3 py-2"
                    />
                </div>
                <button
                    type="submit"
                    disabled={busy}
                    class="w-full rounded-md bg-indigo-600 px-4 py-2 text-white hover:bg-indigo-700 disabled:opacity-50"
                >
                    { if busy { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
            <p class="mt-4 text-sm text-gray-600">
                {"No account yet? "}
                <Link<Route> to={Route::Register} classes="text-indigo-600 hover:text-indigo-800">
                    {"Register"}
                </Link<Route>>
            </p>
        </div>
    }
}

//! Top navigation bar

use crate::auth::{logout, use_auth};
use crate::components::toast::use_toasts;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Navigation bar; links depend on whether a user is signed in
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("Navbar must be rendered inside a Router");

    let on_logout = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            logout(auth.clone(), toasts.clone(), navigator.clone());
        })
    };

    html! {
        <nav class="border-b border-gray-200 bg-white">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <Link<Route> to={Route::Home} classes="text-lg font-semibold text-indigo-600">
                    {"Tick"}
                </Link<Route>>
                <div class="flex items-center gap-4 text-sm">
                    if auth.is_authenticated() {
                        <Link<Route> to={Route::Dashboard} classes="text-gray-700 hover:text-indigo-600">
                            {"Dashboard"}
                        </Link<Route>>
                        <Link<Route> to={Route::Profile} classes="text-gray-700 hover:text-indigo-600">
                            {"Profile"}
                        </Link<Route>>
                        <button
                            onclick={on_logout}
                            class="rounded bg-gray-100 px-3 py-1.5 text-gray-700 hover:bg-gray-200"
                        >
                            {"Logout"}
                        </button>
                    } else {
                        <Link<Route> to={Route::Login} classes="text-gray-700 hover:text-indigo-600">
                            {"Login"}
                        </Link<Route>>
                        <Link<Route> to={Route::Register} classes="rounded bg-indigo-600 px-3 py-1.5 text-white hover:bg-indigo-700">
                            {"Register"}
                        </Link<Route>>
                    }
                </div>
            </div>
        </nav>
    }
}

//! Landing page

use crate::auth::use_is_authenticated;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <div class="mx-auto max-w-2xl py-16 text-center">
            <h1 class="text-4xl font-bold text-gray-900">{"Tick"}</h1>
            <p class="mt-4 text-lg text-gray-600">
                {"Keep track of what matters. Simple, fast todo management."}
            </p>
            <div class="mt-8 flex justify-center gap-4">
                if is_authenticated {
                    <Link<Route> to={Route::Dashboard} classes="rounded-lg bg-indigo-600 px-6 py-3 text-white hover:bg-indigo-700">
                        {"Go to dashboard"}
                    </Link<Route>>
                } else {
                    <Link<Route> to={Route::Register} classes="rounded-lg bg-indigo-600 px-6 py-3 text-white hover:bg-indigo-700">
                        {"Get started"}
                    </Link<Route>>
                    <Link<Route> to={Route::Login} classes="rounded-lg border border-gray-300 px-6 py-3 text-gray-700 hover:bg-gray-50">
                        {"Sign in"}
                    </Link<Route>>
                }
            </div>
        </div>
    }
}

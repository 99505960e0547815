//! 404 page

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="mx-auto max-w-md py-16 text-center">
            <h1 class="text-5xl font-bold text-gray-900">{"404"}</h1>
            <p class="mt-4 text-gray-600">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-6 inline-block text-indigo-600 hover:text-indigo-800">
                {"Back home"}
            </Link<Route>>
        </div>
    }
}

//! Application root
//!
//! Provider nesting matters: toasts sit outside auth so that auth
//! operations can notify, and the guard sits inside the router so it can
//! navigate.

use crate::auth::{use_auth, AuthProvider};
use crate::components::toast::ToastProvider;
use crate::components::{Navbar, Spinner};
use crate::pages::{
    DashboardPage, HomePage, LoginPage, NotFoundPage, ProfilePage, RegisterPage, TodoCreatePage,
    TodoEditPage,
};
use crate::routes::{guard_redirect, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <div class="min-h-screen bg-gray-50">
                        <Navbar />
                        <main class="px-4">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
}

/// Applies the route access policy before rendering a page
///
/// While the session is still being restored this renders a spinner
/// instead of deciding; once settled, a disallowed route triggers a
/// navigation and renders nothing for the frame in between.
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("Guarded must be rendered inside a Router");

    let redirect = guard_redirect(
        auth.is_authenticated(),
        auth.is_loading(),
        props.route.class(),
    );

    {
        let redirect = redirect.clone();
        use_effect_with(redirect, move |redirect| {
            if let Some(target) = redirect {
                navigator.push(target);
            }
            || ()
        });
    }

    // Public routes render right away; gated routes wait for the restore
    // to settle so the decision is made on real session state.
    if auth.is_loading() && props.route.class() != crate::routes::RouteClass::Public {
        return html! { <Spinner text={Some("Loading...".to_string())} /> };
    }
    if redirect.is_some() {
        return html! {};
    }

    match props.route.clone() {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::TodoCreate => html! { <TodoCreatePage /> },
        Route::TodoEdit { id } => html! { <TodoEditPage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

//! Profile page

use crate::auth::{logout_all, use_auth, use_current_user};
use crate::components::toast::use_toasts;
use tick_client::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;

/// Rendered name, with a placeholder when no name fields are set
fn display_name(user: &UserProfile) -> String {
    match (&user.first_name, &user.last_name) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.clone(),
        (None, Some(last)) => last.clone(),
        (None, None) => "Not set".to_string(),
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator().expect("ProfilePage must be rendered inside a Router");
    let user = use_current_user();

    let on_logout_all = {
        Callback::from(move |_| {
            logout_all(auth.clone(), toasts.clone(), navigator.clone());
        })
    };

    let Some(user) = user else {
        // The route guard redirects anonymous users; nothing to show meanwhile
        return html! {};
    };

    let name = display_name(&user);

    html! {
        <div class="mx-auto max-w-md py-12">
            <h1 class="text-2xl font-bold text-gray-900">{"Your profile"}</h1>
            <dl class="mt-6 space-y-4 rounded-lg border border-gray-200 bg-white p-6">
                <div>
                    <dt class="text-sm text-gray-500">{"Name"}</dt>
                    <dd class="text-gray-900">{name}</dd>
                </div>
                <div>
                    <dt class="text-sm text-gray-500">{"Email"}</dt>
                    <dd class="text-gray-900">{user.email.clone()}</dd>
                </div>
            </dl>
            <button
                onclick={on_logout_all}
                class="mt-6 w-full rounded-md border border-red-300 px-4 py-2 text-red-600 hover:bg-red-50"
            >
                {"Log out from all devices"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> UserProfile {
        UserProfile {
            email: "a@b.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn display_name_joins_available_fields() {
        assert_eq!(display_name(&user(Some("Ada"), Some("Lovelace"))), "Ada Lovelace");
        assert_eq!(display_name(&user(Some("Ada"), None)), "Ada");
        assert_eq!(display_name(&user(None, Some("Lovelace"))), "Lovelace");
    }

    #[test]
    fn display_name_has_a_placeholder_when_no_name_is_set() {
        assert_eq!(display_name(&user(None, None)), "Not set");
    }
}

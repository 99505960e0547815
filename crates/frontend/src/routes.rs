//! Route table and access classification

use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/todos/create")]
    TodoCreate,
    #[at("/todos/edit/:id")]
    TodoEdit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Access requirement of a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a signed-in session
    Protected,
    /// Only reachable while signed out (login, register)
    AuthOnly,
    Public,
}

impl Route {
    pub fn class(&self) -> RouteClass {
        match self {
            Route::Dashboard | Route::Profile | Route::TodoCreate | Route::TodoEdit { .. } => {
                RouteClass::Protected
            }
            Route::Login | Route::Register => RouteClass::AuthOnly,
            Route::Home | Route::NotFound => RouteClass::Public,
        }
    }
}

/// Where the router must send the user, if anywhere
///
/// Never redirects while the session is still being restored; a decision
/// based on a half-loaded session would bounce users who are actually
/// signed in.
pub fn guard_redirect(is_authenticated: bool, is_loading: bool, class: RouteClass) -> Option<Route> {
    if is_loading {
        return None;
    }
    match class {
        RouteClass::AuthOnly if is_authenticated => Some(Route::Dashboard),
        RouteClass::Protected if !is_authenticated => Some(Route::Login),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_matches_the_route_table() {
        assert_eq!(Route::Dashboard.class(), RouteClass::Protected);
        assert_eq!(Route::Profile.class(), RouteClass::Protected);
        assert_eq!(Route::TodoCreate.class(), RouteClass::Protected);
        assert_eq!(
            Route::TodoEdit { id: "1".into() }.class(),
            RouteClass::Protected
        );
        assert_eq!(Route::Login.class(), RouteClass::AuthOnly);
        assert_eq!(Route::Register.class(), RouteClass::AuthOnly);
        assert_eq!(Route::Home.class(), RouteClass::Public);
        assert_eq!(Route::NotFound.class(), RouteClass::Public);
    }

    #[test]
    fn anonymous_users_are_sent_to_login_from_protected_routes() {
        assert_eq!(
            guard_redirect(false, false, RouteClass::Protected),
            Some(Route::Login)
        );
    }

    #[test]
    fn authenticated_users_are_sent_away_from_auth_routes() {
        assert_eq!(
            guard_redirect(true, false, RouteClass::AuthOnly),
            Some(Route::Dashboard)
        );
    }

    #[test]
    fn no_redirect_while_loading() {
        assert_eq!(guard_redirect(false, true, RouteClass::Protected), None);
        assert_eq!(guard_redirect(true, true, RouteClass::AuthOnly), None);
    }

    #[test]
    fn settled_states_leave_allowed_routes_alone() {
        assert_eq!(guard_redirect(true, false, RouteClass::Protected), None);
        assert_eq!(guard_redirect(false, false, RouteClass::AuthOnly), None);
        assert_eq!(guard_redirect(true, false, RouteClass::Public), None);
        assert_eq!(guard_redirect(false, false, RouteClass::Public), None);
    }
}

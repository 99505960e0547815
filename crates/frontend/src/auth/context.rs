//! Global authentication context and provider
//!
//! The reducer holds the session controller's state machine; the operation
//! functions drive `tick_client::AuthService` and handle navigation and
//! user-facing notifications. Pages observe the session only through this
//! context.

use crate::client::auth_service;
use crate::components::toast::{ToastAction, ToastContext};
use crate::routes::Route;
use std::rc::Rc;
use tick_client::types::RegisterRequest;
use tick_client::{hook, UserProfile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Session controller states
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Before the startup restore has begun
    Uninitialized,
    /// An operation is in flight
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub state: SessionState,
}

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            state: SessionState::Uninitialized,
        }
    }
}

impl AuthContextData {
    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True until the startup restore (or an in-flight operation) settles
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            SessionState::Uninitialized | SessionState::Loading
        )
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }
}

/// Authentication context actions
pub enum AuthAction {
    Begin,
    SignedIn(UserProfile),
    SignedOut,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = match action {
            AuthAction::Begin => SessionState::Loading,
            AuthAction::SignedIn(user) => SessionState::Authenticated(user),
            AuthAction::SignedOut => SessionState::Anonymous,
        };
        Rc::new(Self { state })
    }
}

/// Sign in and move to the dashboard on success
///
/// Failures surface as a toast; the state simply returns to anonymous and
/// nothing is persisted.
pub fn login(
    auth: AuthContext,
    toasts: ToastContext,
    navigator: Navigator,
    email: String,
    password: String,
) {
    auth.dispatch(AuthAction::Begin);
    spawn_local(async move {
        match auth_service().login(&email, &password).await {
            Ok(user) => {
                auth.dispatch(AuthAction::SignedIn(user));
                toasts.dispatch(ToastAction::Success(
                    "You have been logged in successfully.".to_string(),
                ));
                navigator.push(&Route::Dashboard);
            }
            Err(err) => {
                auth.dispatch(AuthAction::SignedOut);
                toasts.dispatch(ToastAction::Error(err.to_string()));
            }
        }
    });
}

/// Create an account and move to the dashboard on success
pub fn register(
    auth: AuthContext,
    toasts: ToastContext,
    navigator: Navigator,
    request: RegisterRequest,
) {
    auth.dispatch(AuthAction::Begin);
    spawn_local(async move {
        match auth_service().register(request).await {
            Ok(user) => {
                auth.dispatch(AuthAction::SignedIn(user));
                toasts.dispatch(ToastAction::Success(
                    "Your account has been created successfully.".to_string(),
                ));
                navigator.push(&Route::Dashboard);
            }
            Err(err) => {
                auth.dispatch(AuthAction::SignedOut);
                toasts.dispatch(ToastAction::Error(err.to_string()));
            }
        }
    });
}

/// Sign out of this session
pub fn logout(auth: AuthContext, toasts: ToastContext, navigator: Navigator) {
    sign_out(auth, toasts, navigator, false);
}

/// Sign out of every session for this account
pub fn logout_all(auth: AuthContext, toasts: ToastContext, navigator: Navigator) {
    sign_out(auth, toasts, navigator, true);
}

fn sign_out(auth: AuthContext, toasts: ToastContext, navigator: Navigator, all_devices: bool) {
    auth.dispatch(AuthAction::Begin);
    spawn_local(async move {
        let service = auth_service();
        let result = if all_devices {
            service.logout_all().await
        } else {
            service.logout().await
        };

        // Local state goes anonymous regardless of the server outcome; the
        // service has already cleared the store.
        auth.dispatch(AuthAction::SignedOut);
        match result {
            Ok(()) => {
                let message = if all_devices {
                    "You have been logged out from all devices."
                } else {
                    "You have been logged out successfully."
                };
                toasts.dispatch(ToastAction::Success(message.to_string()));
            }
            Err(err) => toasts.dispatch(ToastAction::Error(err.to_string())),
        }
        navigator.push(&Route::Login);
    });
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(AuthContextData::default);

    // Forced sign-out when the pipeline gives up on the session
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            let handle = auth.clone();
            hook::set_session_expired_hook(Rc::new(move || {
                handle.dispatch(AuthAction::SignedOut);
            }));

            // Cleanup on unmount
            move || {
                hook::clear_session_expired_hook();
            }
        });
    }

    // Restore the persisted session once at startup
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            auth.dispatch(AuthAction::Begin);
            spawn_local(async move {
                match auth_service().initialize().await {
                    Some(user) => {
                        tracing::debug!(email = ?user.email, "restored persisted session");
                        auth.dispatch(AuthAction::SignedIn(user));
                    }
                    None => auth.dispatch(AuthAction::SignedOut),
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the signed-in user
#[hook]
pub fn use_current_user() -> Option<UserProfile> {
    let auth = use_auth();
    auth.current_user().cloned()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.is_authenticated()
}

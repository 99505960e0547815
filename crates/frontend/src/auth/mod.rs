//! Session controller: global auth context, provider, and operations

pub mod context;

pub use context::{
    login, logout, logout_all, register, use_auth, use_current_user, use_is_authenticated,
    AuthAction, AuthContext, AuthContextData, AuthProvider, SessionState,
};

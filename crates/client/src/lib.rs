//! Client-side session subsystem for the Tick frontend
//!
//! Owns everything with real state-machine and concurrency concerns:
//! persisted session state, access-token expiry and refresh, the shared HTTP
//! pipeline with its one-shot 401 recovery, and the error normalization
//! every call flows through. The UI layer drives it through
//! [`AuthService`] and observes the session through [`SessionStore`].
//!
//! Compiles on both native targets and `wasm32-unknown-unknown`; the native
//! build exists so the subsystem can be tested without a browser.

pub mod auth;
pub mod client;
pub mod error;
pub mod hook;
pub mod session;
pub mod token;
pub mod types;

pub use auth::AuthService;
pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use session::{Session, SessionStorage, SessionStore, StorageError, TokenPair, UserProfile};

//! Session lifecycle operations
//!
//! [`AuthService`] carries the operations the UI's session controller
//! drives: startup restore, login, register, and the two logout variants.
//! State transitions and navigation stay in the frontend; everything here is
//! plain async logic over the pipeline and the session store.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::session::{SessionStorage, SessionStore, TokenPair, UserProfile};
use crate::token;
use crate::types::{LoginRequest, RegisterRequest};

pub struct AuthService<S> {
    client: ApiClient<S>,
}

impl<S> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<S: SessionStorage + 'static> AuthService<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<S> {
        &self.client
    }

    pub fn store(&self) -> &SessionStore<S> {
        self.client.session()
    }

    /// Restore the session at application startup
    ///
    /// Loads persisted state and, when the stored access token has already
    /// expired, attempts one refresh. Returns the signed-in user, or `None`
    /// when there is no usable session (the store is left empty in that
    /// case).
    pub async fn initialize(&self) -> Option<UserProfile> {
        let session = self.store().load();
        let (user, access_token) = match (session.user, session.access_token) {
            (Some(user), Some(access_token)) => (user, access_token),
            _ => return None,
        };

        if token::is_expired(&access_token) {
            tracing::debug!("stored access token expired, refreshing");
            if self.client.refresh().await.is_err() {
                // Refresh already cleared the store.
                return None;
            }
        }
        Some(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let tokens: TokenPair = self.client.post("/auth/login", &request).await?;
        let user = profile_from_token(&tokens.access_token, email, None, None);
        self.persist(user, tokens)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile, ApiError> {
        let tokens: TokenPair = self.client.post("/auth/register", &request).await?;
        let user = profile_from_token(
            &tokens.access_token,
            &request.email,
            request.first_name,
            request.last_name,
        );
        self.persist(user, tokens)
    }

    /// Sign out of this session
    ///
    /// The local session is cleared whether or not the server call went
    /// through; a failed server-side logout must not leave the client
    /// believing it is still signed in.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.sign_out("/auth/logout").await
    }

    /// Sign out of every session for this account
    pub async fn logout_all(&self) -> Result<(), ApiError> {
        self.sign_out("/auth/logout-all").await
    }

    async fn sign_out(&self, path: &str) -> Result<(), ApiError> {
        let result = self.client.post_empty(path).await;
        if let Err(err) = &result {
            tracing::warn!(status = err.status, "server-side logout failed, clearing locally");
        }
        self.store().clear();
        result
    }

    fn persist(&self, user: UserProfile, tokens: TokenPair) -> Result<UserProfile, ApiError> {
        self.store()
            .save(user.clone(), tokens)
            .map_err(|err| ApiError::unexpected(err.to_string()))?;
        Ok(user)
    }
}

/// Derive the profile for a fresh session
///
/// Token claims take precedence over caller-supplied fields; the submitted
/// values are the fallback when the token carries no profile claims, and the
/// submitted email is always available as a last resort.
fn profile_from_token(
    access_token: &str,
    email: &str,
    first_name: Option<String>,
    last_name: Option<String>,
) -> UserProfile {
    match token::decode_claims(access_token) {
        Ok(claims) => UserProfile {
            email: claims.email.unwrap_or_else(|| email.to_string()),
            first_name: claims.first_name.or(first_name),
            last_name: claims.last_name.or(last_name),
        },
        Err(_) => UserProfile {
            email: email.to_string(),
            first_name,
            last_name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    fn make_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn claims_take_precedence_over_submitted_fields() {
        let token = make_token(serde_json::json!({
            "exp": 2_000_000_000i64,
            "email": "claims@b.com",
            "firstName": "Claims"
        }));

        let user = profile_from_token(&token, "form@b.com", Some("Form".into()), Some("Name".into()));
        assert_eq!(user.email, "claims@b.com");
        assert_eq!(user.first_name.as_deref(), Some("Claims"));
        // No lastName claim, so the submitted value fills in.
        assert_eq!(user.last_name.as_deref(), Some("Name"));
    }

    #[test]
    fn submitted_email_is_the_fallback() {
        let token = make_token(serde_json::json!({ "exp": 2_000_000_000i64 }));
        let user = profile_from_token(&token, "form@b.com", None, None);
        assert_eq!(user.email, "form@b.com");
    }

    #[test]
    fn undecodable_token_falls_back_to_submitted_fields() {
        let user = profile_from_token("garbage", "form@b.com", Some("Form".into()), None);
        assert_eq!(user.email, "form@b.com");
        assert_eq!(user.first_name.as_deref(), Some("Form"));
    }
}

//! Shared HTTP pipeline
//!
//! Every API call (auth and todo alike) goes through [`ApiClient`]: bearer
//! injection, error normalization, and the one-shot refresh-and-retry
//! recovery for 401s. The recovery is an explicit wrapper around the call
//! site rather than a transport interceptor, so the retry budget is visible
//! in the control flow: the retried attempt never re-enters recovery.

use crate::error::{ApiError, ErrorBody};
use crate::hook;
use crate::session::{SessionStorage, SessionStore, TokenPair};
use crate::types::RefreshRequest;
use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

type RefreshFuture = Shared<LocalBoxFuture<'static, Result<TokenPair, ApiError>>>;

/// API client bound to a base URL and a session store
///
/// Cheap to clone; clones share the session and the in-flight refresh slot.
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
    /// In-flight refresh exchange, shared by all concurrent callers
    refresh_slot: Rc<RefCell<Option<RefreshFuture>>>,
}

impl<S> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
            refresh_slot: self.refresh_slot.clone(),
        }
    }
}

impl<S: SessionStorage + 'static> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            refresh_slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// POST without a request or response body (logout endpoints)
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send_no_content(Method::POST, path, None::<&()>).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_no_content(Method::DELETE, path, None::<&()>).await
    }

    /// Issue a call and parse the JSON response body
    pub async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.execute_with_recovery(method, path, body).await?;
        response.json().await.map_err(ApiError::from)
    }

    /// Issue a call, discarding any success body
    pub async fn send_no_content<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.execute_with_recovery(method, path, body).await?;
        Ok(())
    }

    async fn execute_with_recovery<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        match self.execute(method.clone(), path, body).await {
            Err(err) if err.is_auth_expired() => {
                self.recover_auth(err).await?;
                // One retry with the refreshed token; a 401 here is final.
                self.execute(method, path, body).await
            }
            other => other,
        }
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            Err(ApiError::from_response(status.as_u16(), body))
        }
    }

    /// One-shot 401 recovery
    ///
    /// Returns `Ok` when the session was refreshed and the call may be
    /// retried. Otherwise the store has been cleared, the expiry hook has
    /// fired, and the original 401 comes back to the caller.
    async fn recover_auth(&self, original: ApiError) -> Result<(), ApiError> {
        if self.session.refresh_token().is_none() {
            self.session.clear();
            hook::notify_session_expired();
            return Err(original);
        }

        match self.refresh().await {
            Ok(_) => Ok(()),
            Err(refresh_err) => {
                tracing::debug!(status = refresh_err.status, "refresh failed during 401 recovery");
                hook::notify_session_expired();
                Err(original)
            }
        }
    }

    /// Exchange the refresh token for a new pair
    ///
    /// Concurrent calls are coalesced into a single exchange; every caller
    /// awaits the same outcome. On success the new pair is persisted through
    /// the session store; on any failure the store is cleared. Refresh never
    /// partially succeeds.
    pub async fn refresh(&self) -> Result<TokenPair, ApiError> {
        let shared = {
            let mut slot = self.refresh_slot.borrow_mut();
            match slot.as_ref() {
                Some(inflight) => inflight.clone(),
                None => {
                    let client = self.clone();
                    let inflight: RefreshFuture = async move {
                        let result = client.exchange_refresh_token().await;
                        client.refresh_slot.borrow_mut().take();
                        result
                    }
                    .boxed_local()
                    .shared();
                    *slot = Some(inflight.clone());
                    inflight
                }
            }
        };
        shared.await
    }

    async fn exchange_refresh_token(&self) -> Result<TokenPair, ApiError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.clear();
            return Err(ApiError::unexpected("no refresh token available"));
        };

        tracing::debug!("exchanging refresh token");
        let outcome = async {
            let response = self
                .http
                .post(format!("{}/auth/refresh", self.base_url))
                .json(&RefreshRequest { refresh_token })
                .send()
                .await
                .map_err(ApiError::from)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.json::<ErrorBody>().await.unwrap_or_default();
                return Err(ApiError::from_response(status.as_u16(), body));
            }
            response.json::<TokenPair>().await.map_err(ApiError::from)
        }
        .await;

        match outcome {
            Ok(pair) => {
                if let Err(err) = self.session.update_tokens(pair.clone()) {
                    self.session.clear();
                    return Err(ApiError::unexpected(err.to_string()));
                }
                tracing::debug!("refresh succeeded, new tokens persisted");
                Ok(pair)
            }
            Err(err) => {
                tracing::warn!(status = err.status, "token refresh failed, clearing session");
                self.session.clear();
                Err(err)
            }
        }
    }
}

//! Todo API service
//!
//! Every call goes through the shared [`ApiClient`], so expired tokens are
//! refreshed and retried transparently.

use crate::client::api_client;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tick_client::ApiError;

/// A todo item as returned by the server
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a todo
#[derive(Clone, Debug, Serialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for updating a todo; absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateTodoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

pub struct TodoApiService;

impl TodoApiService {
    pub async fn get_all() -> Result<Vec<Todo>, ApiError> {
        api_client().get("/todos").await
    }

    pub async fn get(id: &str) -> Result<Todo, ApiError> {
        api_client().get(&format!("/todos/{id}")).await
    }

    pub async fn create(request: &CreateTodoRequest) -> Result<Todo, ApiError> {
        api_client().post("/todos", request).await
    }

    pub async fn update(id: &str, request: &UpdateTodoRequest) -> Result<Todo, ApiError> {
        api_client().put(&format!("/todos/{id}"), request).await
    }

    pub async fn delete(id: &str) -> Result<(), ApiError> {
        api_client().delete(&format!("/todos/{id}")).await
    }
}

//! Landmark HTTP Routes
//!
//! The five CRUD endpoints over the landmark store. Request bodies arrive
//! loosely typed (`serde_json::Value`) and are validated into a
//! [`LandmarkDraft`] at this boundary; the store never sees raw input.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::store::{InMemoryLandmarkStore, Landmark, LandmarkDraft, LandmarkStore};

use super::errors::{ApiError, ApiResult, ValidationErrors};

// ==================
// Shared State
// ==================

/// Landmark state shared across handlers
pub struct LandmarkState {
    pub store: Arc<dyn LandmarkStore>,
}

impl LandmarkState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryLandmarkStore::new()),
        }
    }

    pub fn with_store(store: Arc<dyn LandmarkStore>) -> Self {
        Self { store }
    }
}

impl Default for LandmarkState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Landmark Routes
// ==================

/// Create landmark routes
pub fn landmark_routes(state: Arc<LandmarkState>) -> Router {
    Router::new()
        .route("/landmarks", get(list_landmarks_handler))
        .route("/landmarks", post(create_landmark_handler))
        .route("/landmarks/{id}", get(get_landmark_handler))
        .route("/landmarks/{id}", put(update_landmark_handler))
        .route("/landmarks/{id}", delete(delete_landmark_handler))
        .with_state(state)
}

// ==================
// Validation
// ==================

const NAME_REQUIRED: &str = "Name is required and must be a string.";
const DESCRIPTION_REQUIRED: &str = "Description is required and must be a string.";
const IMAGE_URL_REQUIRED: &str = "Image URL is required and must be a string.";

/// Extract a required string field; absent, non-string, and empty values
/// all count as missing
fn string_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Validate a create body: `name` and `description` required, `imageUrl`
/// taken as-is when it is a string
fn validate_create(body: &Value) -> ApiResult<LandmarkDraft> {
    let mut errors = ValidationErrors::new();

    let name = string_field(body, "name");
    if name.is_none() {
        errors.insert("name".to_string(), NAME_REQUIRED.to_string());
    }
    let description = string_field(body, "description");
    if description.is_none() {
        errors.insert("description".to_string(), DESCRIPTION_REQUIRED.to_string());
    }
    let image_url = string_field(body, "imageUrl");

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(LandmarkDraft {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        image_url,
    })
}

/// Validate an update body: all three fields required
fn validate_update(body: &Value) -> ApiResult<LandmarkDraft> {
    let mut errors = ValidationErrors::new();

    let name = string_field(body, "name");
    if name.is_none() {
        errors.insert("name".to_string(), NAME_REQUIRED.to_string());
    }
    let description = string_field(body, "description");
    if description.is_none() {
        errors.insert("description".to_string(), DESCRIPTION_REQUIRED.to_string());
    }
    let image_url = string_field(body, "imageUrl");
    if image_url.is_none() {
        errors.insert("imageUrl".to_string(), IMAGE_URL_REQUIRED.to_string());
    }

    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    Ok(LandmarkDraft {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        image_url,
    })
}

// ==================
// Handlers
// ==================

async fn list_landmarks_handler(
    State(state): State<Arc<LandmarkState>>,
) -> ApiResult<Json<Vec<Landmark>>> {
    Ok(Json(state.store.list()?))
}

async fn get_landmark_handler(
    State(state): State<Arc<LandmarkState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Landmark>> {
    Ok(Json(state.store.get(&id)?))
}

async fn create_landmark_handler(
    State(state): State<Arc<LandmarkState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Landmark>)> {
    let Json(body) = body?;
    let draft = validate_create(&body)?;

    let created = state.store.create(draft)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_landmark_handler(
    State(state): State<Arc<LandmarkState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Landmark>> {
    let Json(body) = body?;

    // Absent id wins over an invalid body: 404 before 400
    state.store.get(&id)?;

    let draft = validate_update(&body)?;
    Ok(Json(state.store.replace(&id, draft)?))
}

async fn delete_landmark_handler(
    State(state): State<Arc<LandmarkState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Landmark>> {
    Ok(Json(state.store.remove(&id)?))
}

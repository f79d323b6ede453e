use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::document::ScheduleDocument;
use crate::query::{self, AvailabilityReport, QueryError};

/// Shared server state: the schedule document is loaded once at
/// startup and never mutated, so a plain `Arc` with no lock suffices.
#[derive(Clone)]
pub struct AppState {
    document: Arc<ScheduleDocument>,
}

impl AppState {
    pub fn new(document: ScheduleDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    pub fn with_shared(document: Arc<ScheduleDocument>) -> Self {
        Self { document }
    }

    fn document(&self) -> &ScheduleDocument {
        &self.document
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl From<QueryError> for ApiError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::RoomNotFound(_) => ApiError::NotFound(value.to_string()),
            QueryError::InvalidDay(_) | QueryError::InvalidTime(_) => {
                ApiError::Invalid(value.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityPayload {
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/rooms", get(list_rooms))
        .route("/api/available-rooms", post(available_rooms))
        .route("/api/room/:room", get(room_schedule))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, document: ScheduleDocument) -> std::io::Result<()> {
    let state = AppState::new(document);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_rooms(State(state): State<AppState>) -> Json<serde_json::Value> {
    let doc = state.document();
    Json(json!({
        "rooms": &doc.room_list,
        "total": doc.room_list.len(),
    }))
}

async fn available_rooms(
    State(state): State<AppState>,
    Json(payload): Json<AvailabilityPayload>,
) -> Result<Json<AvailabilityReport>, ApiError> {
    let (Some(day), Some(time)) = (payload.day, payload.time) else {
        return Err(ApiError::invalid("missing day or time parameter"));
    };
    let (day, time) = query::parse_query(&day, &time)?;
    info!("POST /api/available-rooms {day} {time}");
    Ok(Json(query::availability(state.document(), day, time)))
}

async fn room_schedule(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!("GET /api/room/{room}");
    let schedule = query::room_week(state.document(), &room)?;
    Ok(Json(json!({
        "room": room,
        "schedule": schedule,
    })))
}

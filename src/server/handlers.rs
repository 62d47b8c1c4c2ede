use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use crate::domain::model::SignupRequest;
use crate::server::AppState;
use crate::utils::error::GatewayError;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to INMAX" }))
}

/// `POST /api/users/` — forwards the signup upstream and relays the reply.
/// Field presence and types are enforced by the `Json` extractor before
/// this handler runs.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(signup): Json<SignupRequest>,
) -> Result<Response, ApiError> {
    let reply = state.atproto.create_account(signup).await?;

    // Any 2xx from upstream passes through with its original status code.
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    Ok((status, Json(reply.body)).into_response())
}

/// Maps gateway errors onto the client-facing contract: upstream rejections
/// keep their status with the upstream body as detail, everything else is a
/// 500 whose detail is the error's string rendering. The variant is still
/// logged, so timeouts and connection failures stay distinguishable.
pub struct ApiError(GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            GatewayError::UpstreamError { status, body } => {
                tracing::warn!("Upstream rejected account creation with status {}", status);
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (code, Json(json!({ "detail": body }))).into_response()
            }
            other => {
                tracing::error!("Account creation failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

use axum::{
    routing::{get, post},
    Router,
    Json,
    extract::State,
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tracing::{error, info};
use validator::Validate;

use crate::config::{EndpointConfig, SessionConfig};
use crate::food::{plan_meals, PlanError};

#[derive(Clone)]
pub struct AppState {
    endpoints: Arc<EndpointConfig>,
}

/// Keys ride along with each request and are dropped once it is answered.
#[derive(Deserialize, Validate)]
pub struct PlanRequest {
    #[validate(length(min = 1, max = 1000))]
    request: String,
    #[serde(default)]
    openai_api_key: Option<String>,
    #[serde(default)]
    serpapi_api_key: Option<String>,
}

#[derive(Serialize)]
struct ApiResponse {
    status: String,
}

/// Create and configure the API router
pub fn create_api(endpoints: EndpointConfig) -> Router {
    let state = AppState {
        endpoints: Arc::new(endpoints),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/plan", post(plan_handler))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

async fn plan_handler(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse { status: format!("Invalid request: {}", e) }),
        ).into_response();
    }

    let session = SessionConfig::new(request.openai_api_key, request.serpapi_api_key, request.request);

    match plan_meals(session, &state.endpoints).await {
        Ok(plan) => {
            info!(request_id = %plan.request_id, meals = plan.meals.len(), "plan served");
            Json(plan).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(error = %e, "plan request failed");
            }
            (status, Json(ApiResponse { status: e.to_string() })).into_response()
        }
    }
}

fn status_for(error: &PlanError) -> StatusCode {
    match error {
        PlanError::MissingCredential(_) | PlanError::EmptyRequest => StatusCode::BAD_REQUEST,
        PlanError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse { status: "ok".to_string() })
}

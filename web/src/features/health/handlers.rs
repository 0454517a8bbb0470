use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::Database;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service liveness and database reachability", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(db): State<Database>) -> Response {
    let database = match db.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            "unreachable"
        }
    };

    Json(HealthResponse {
        message: "Fit API is running".to_string(),
        database: database.to_string(),
    })
    .into_response()
}

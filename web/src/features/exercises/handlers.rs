use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::exercise::CategoryWithExercises};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises/categories",
    responses(
        (status = 200, description = "List all categories with their exercises", body = Vec<CategoryWithExercises>)
    ),
    tag = "exercises"
)]
pub async fn list_categories(State(db): State<Database>) -> Result<Response, WebError> {
    let categories = services::list_categories(db.pool()).await?;

    Ok(Json(categories).into_response())
}

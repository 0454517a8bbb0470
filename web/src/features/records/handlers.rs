use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::record::{
        CreateRecordRequest, DeleteRecordResponse, RecordFilter, RecordResponse,
        SyncRecordsRequest, SyncRecordsResponse, UpdateRecordRequest,
    },
    models::WorkoutRecord,
    services::normalizer,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/records",
    request_body = CreateRecordRequest,
    responses(
        (status = 201, description = "Workout record created", body = WorkoutRecord),
        (status = 400, description = "Malformed payload"),
        (status = 409, description = "Unknown exercise")
    ),
    tag = "records"
)]
pub async fn create_record(
    State(db): State<Database>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let payload = normalizer::normalize_record(&req)?;
    let record = services::create_record(db.pool(), &payload).await?;

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/records",
    params(RecordFilter),
    responses(
        (status = 200, description = "Workout records, newest workout first", body = Vec<RecordResponse>)
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
    Query(filter): Query<RecordFilter>,
) -> Result<Response, WebError> {
    let records = services::list_records(db.pool(), &filter).await?;

    Ok(Json(records).into_response())
}

#[utoipa::path(
    post,
    path = "/api/records/batch",
    request_body = SyncRecordsRequest,
    responses(
        (status = 200, description = "All records inserted", body = SyncRecordsResponse),
        (status = 400, description = "records is not an array, or an element is malformed"),
        (status = 409, description = "Unknown exercise in the batch")
    ),
    tag = "records"
)]
pub async fn sync_records(
    State(db): State<Database>,
    Json(req): Json<SyncRecordsRequest>,
) -> Result<Response, WebError> {
    let payloads = normalizer::normalize_batch(&req.records)?;
    let count = services::sync_records(db.pool(), &payloads).await?;

    Ok(Json(SyncRecordsResponse {
        message: "Records synced successfully".to_string(),
        count,
    })
    .into_response())
}

#[utoipa::path(
    put,
    path = "/api/records/{id}",
    params(
        ("id" = i64, Path, description = "Workout record id")
    ),
    request_body = UpdateRecordRequest,
    responses(
        (status = 200, description = "Workout record updated", body = WorkoutRecord),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "Record not found")
    ),
    tag = "records"
)]
pub async fn update_record(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let patch = normalizer::normalize_update(&req)?;
    let updated = services::update_record(db.pool(), id, &patch).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/records/{id}",
    params(
        ("id" = i64, Path, description = "Workout record id")
    ),
    responses(
        (status = 200, description = "Workout record deleted", body = DeleteRecordResponse),
        (status = 404, description = "Record not found")
    ),
    tag = "records"
)]
pub async fn delete_record(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_record(db.pool(), id).await?;

    Ok(Json(DeleteRecordResponse {
        message: "Record deleted successfully".to_string(),
    })
    .into_response())
}

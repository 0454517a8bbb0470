use sqlx::SqlitePool;
use storage::{
    dto::record::{NewWorkoutRecord, RecordFilter, RecordResponse, WorkoutRecordPatch},
    error::Result,
    models::WorkoutRecord,
    repository::record::RecordRepository,
};

/// Create a single workout record
pub async fn create_record(pool: &SqlitePool, payload: &NewWorkoutRecord) -> Result<WorkoutRecord> {
    let repo = RecordRepository::new(pool);
    repo.create(payload).await
}

/// List workout records with their exercise and category, newest first
pub async fn list_records(pool: &SqlitePool, filter: &RecordFilter) -> Result<Vec<RecordResponse>> {
    let repo = RecordRepository::new(pool);
    repo.list(filter).await
}

/// Bulk insert a batch of records, all-or-nothing
pub async fn sync_records(pool: &SqlitePool, payloads: &[NewWorkoutRecord]) -> Result<u64> {
    let repo = RecordRepository::new(pool);
    repo.insert_batch(payloads).await
}

/// Apply a sparse update to one record
pub async fn update_record(
    pool: &SqlitePool,
    id: i64,
    patch: &WorkoutRecordPatch,
) -> Result<WorkoutRecord> {
    let repo = RecordRepository::new(pool);
    repo.update(id, patch).await
}

/// Delete one record by id
pub async fn delete_record(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = RecordRepository::new(pool);
    repo.delete(id).await
}

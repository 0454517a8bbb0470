use chrono::NaiveDateTime;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use crate::dto::record::{
    CategoryInfo, ExerciseInfo, NewWorkoutRecord, RecordFilter, RecordResponse, WorkoutRecordPatch,
};
use crate::error::{Result, StorageError};
use crate::models::WorkoutRecord;

const RECORD_COLUMNS: &str =
    "id, user_id, exercise_id, reps, weight, weight_unit, sets, workout_time, created_at";

#[derive(FromRow)]
struct JoinedRecordRow {
    id: i64,
    user_id: i64,
    exercise_id: i64,
    reps: i64,
    weight: f64,
    weight_unit: String,
    sets: i64,
    workout_time: NaiveDateTime,
    created_at: NaiveDateTime,
    exercise_name: String,
    category_id: i64,
    category_slug: String,
    category_name: String,
}

impl From<JoinedRecordRow> for RecordResponse {
    fn from(row: JoinedRecordRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            exercise_id: row.exercise_id,
            reps: row.reps,
            weight: row.weight,
            weight_unit: row.weight_unit,
            sets: row.sets,
            workout_time: row.workout_time,
            created_at: row.created_at,
            exercise: ExerciseInfo {
                id: row.exercise_id,
                name: row.exercise_name,
                category_id: row.category_id,
                category: CategoryInfo {
                    id: row.category_id,
                    slug: row.category_slug,
                    name: row.category_name,
                },
            },
        }
    }
}

pub struct RecordRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one record and return it with its generated id and created_at.
    pub async fn create(&self, record: &NewWorkoutRecord) -> Result<WorkoutRecord> {
        let created = sqlx::query_as::<_, WorkoutRecord>(&format!(
            r#"
            INSERT INTO workout_records
                (user_id, exercise_id, reps, weight, weight_unit, sets, workout_time)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(record.user_id)
        .bind(record.exercise_id)
        .bind(record.reps)
        .bind(record.weight)
        .bind(&record.weight_unit)
        .bind(record.sets)
        .bind(record.workout_time)
        .fetch_one(self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(created)
    }

    /// List records joined with their exercise and category, newest workout
    /// first, optionally filtered by user.
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<RecordResponse>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT r.id, r.user_id, r.exercise_id, r.reps, r.weight, r.weight_unit, r.sets,
                   r.workout_time, r.created_at,
                   e.name AS exercise_name,
                   c.id AS category_id, c.slug AS category_slug, c.name AS category_name
            FROM workout_records r
            INNER JOIN exercises e ON r.exercise_id = e.id
            INNER JOIN categories c ON e.category_id = c.id
            WHERE 1=1
            "#,
        );

        if let Some(user_id) = filter.user_id {
            query.push(" AND r.user_id = ");
            query.push_bind(user_id);
        }

        query.push(" ORDER BY r.workout_time DESC");

        let rows = query
            .build_query_as::<JoinedRecordRow>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(RecordResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<WorkoutRecord> {
        sqlx::query_as::<_, WorkoutRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM workout_records WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Bulk insert inside one transaction; all rows land or none do.
    pub async fn insert_batch(&self, records: &[NewWorkoutRecord]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;

        let mut query = QueryBuilder::<Sqlite>::new(
            "INSERT INTO workout_records \
             (user_id, exercise_id, reps, weight, weight_unit, sets, workout_time) ",
        );
        query.push_values(records, |mut row, record| {
            row.push_bind(record.user_id)
                .push_bind(record.exercise_id)
                .push_bind(record.reps)
                .push_bind(record.weight)
                .push_bind(&record.weight_unit)
                .push_bind(record.sets)
                .push_bind(record.workout_time);
        });

        let result = query
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_insert_error)?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    /// Apply a sparse patch; fields absent from the patch are left untouched.
    pub async fn update(&self, id: i64, patch: &WorkoutRecordPatch) -> Result<WorkoutRecord> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE workout_records SET ");
        let mut fields = query.separated(", ");

        if let Some(reps) = patch.reps {
            fields.push("reps = ");
            fields.push_bind_unseparated(reps);
        }
        if let Some(weight) = patch.weight {
            fields.push("weight = ");
            fields.push_bind_unseparated(weight);
        }
        if let Some(ref weight_unit) = patch.weight_unit {
            fields.push("weight_unit = ");
            fields.push_bind_unseparated(weight_unit);
        }
        if let Some(sets) = patch.sets {
            fields.push("sets = ");
            fields.push_bind_unseparated(sets);
        }
        if let Some(workout_time) = patch.workout_time {
            fields.push("workout_time = ");
            fields.push_bind_unseparated(workout_time);
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(&format!(" RETURNING {RECORD_COLUMNS}"));

        query
            .build_query_as::<WorkoutRecord>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_records WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn map_insert_error(error: sqlx::Error) -> StorageError {
    let error = StorageError::Database(error);
    if error.is_foreign_key_violation() {
        StorageError::ConstraintViolation("exerciseId does not reference a known exercise".into())
    } else {
        error
    }
}

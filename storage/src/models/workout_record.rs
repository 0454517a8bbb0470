use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: i64,
    pub reps: i64,
    pub weight: f64,
    pub weight_unit: String,
    pub sets: i64,
    pub workout_time: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
}

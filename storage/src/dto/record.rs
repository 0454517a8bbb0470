use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Numeric field as sent by untyped clients: a JSON number or a numeric
/// string. Coercion into a concrete type happens in the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Request payload for creating a single workout record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub user_id: RawNumber,

    pub exercise_id: RawNumber,

    pub reps: RawNumber,

    pub weight: RawNumber,

    #[validate(length(max = 16, message = "weightUnit must be at most 16 characters"))]
    pub weight_unit: Option<String>,

    pub sets: RawNumber,

    #[validate(length(min = 1, max = 32, message = "date must be a YYYY-MM-DD string"))]
    pub date: String,

    #[validate(length(min = 1, max = 32, message = "time must be a HH:MM[:SS] string"))]
    pub time: String,
}

/// Request payload for a sparse workout record update; absent fields are
/// left untouched
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    pub reps: Option<RawNumber>,

    pub weight: Option<RawNumber>,

    #[validate(length(max = 16, message = "weightUnit must be at most 16 characters"))]
    pub weight_unit: Option<String>,

    pub sets: Option<RawNumber>,

    #[validate(length(min = 1, max = 32, message = "date must be a YYYY-MM-DD string"))]
    pub date: Option<String>,

    #[validate(length(min = 1, max = 32, message = "time must be a HH:MM[:SS] string"))]
    pub time: Option<String>,
}

/// Request payload for the batch-sync endpoint. `records` is kept as a raw
/// JSON value so the array type check can fail with a 400 instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncRecordsRequest {
    pub records: serde_json::Value,
}

/// Validated, fully-typed payload the normalizer produces for inserts
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutRecord {
    pub user_id: i64,
    pub exercise_id: i64,
    pub reps: i64,
    pub weight: f64,
    pub weight_unit: String,
    pub sets: i64,
    pub workout_time: NaiveDateTime,
}

/// Validated, fully-typed payload the normalizer produces for sparse updates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutRecordPatch {
    pub reps: Option<i64>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub sets: Option<i64>,
    pub workout_time: Option<NaiveDateTime>,
}

impl WorkoutRecordPatch {
    pub fn is_empty(&self) -> bool {
        self.reps.is_none()
            && self.weight.is_none()
            && self.weight_unit.is_none()
            && self.sets.is_none()
            && self.workout_time.is_none()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    pub user_id: Option<i64>,
}

/// Workout record joined with its exercise and the exercise's category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordResponse {
    pub id: i64,
    pub user_id: i64,
    pub exercise_id: i64,
    pub reps: i64,
    pub weight: f64,
    pub weight_unit: String,
    pub sets: i64,
    pub workout_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub exercise: ExerciseInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category: CategoryInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryInfo {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SyncRecordsResponse {
    pub message: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteRecordResponse {
    pub message: String,
}

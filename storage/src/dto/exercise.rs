use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Exercise;

/// Category with its nested list of exercises
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithExercises {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

use sqlx::SqlitePool;
use storage::{
    dto::exercise::CategoryWithExercises, error::Result, repository::category::CategoryRepository,
};

/// List all categories with their nested exercises
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<CategoryWithExercises>> {
    let repo = CategoryRepository::new(pool);
    repo.list_with_exercises().await
}

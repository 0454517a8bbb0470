use sqlx::SqlitePool;

use crate::dto::exercise::CategoryWithExercises;
use crate::error::Result;
use crate::models::{Category, Exercise};

pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories with their nested exercises, both ordered by id.
    pub async fn list_with_exercises(&self) -> Result<Vec<CategoryWithExercises>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, slug, name FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let exercises = sqlx::query_as::<_, Exercise>(
            "SELECT id, name, category_id FROM exercises ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let mut grouped: Vec<CategoryWithExercises> = categories
            .into_iter()
            .map(|category| CategoryWithExercises {
                id: category.id,
                slug: category.slug,
                name: category.name,
                exercises: Vec::new(),
            })
            .collect();

        for exercise in exercises {
            if let Some(category) = grouped.iter_mut().find(|c| c.id == exercise.category_id) {
                category.exercises.push(exercise);
            }
        }

        Ok(grouped)
    }
}

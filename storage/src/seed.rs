//! Idempotent exercise-catalog seeding.

use sqlx::SqlitePool;

use crate::error::Result;

struct CatalogCategory {
    slug: &'static str,
    name: &'static str,
    exercises: &'static [&'static str],
}

const CATALOG: &[CatalogCategory] = &[
    CatalogCategory {
        slug: "chest",
        name: "Chest",
        exercises: &[
            "Barbell Bench Press",
            "Dumbbell Bench Press",
            "Incline Bench Press",
            "Dips",
            "Cable Fly",
        ],
    },
    CatalogCategory {
        slug: "back",
        name: "Back",
        exercises: &[
            "Pull-up",
            "Barbell Row",
            "Lat Pulldown",
            "Seated Cable Row",
            "Straight-Arm Pulldown",
        ],
    },
    CatalogCategory {
        slug: "shoulders",
        name: "Shoulders",
        exercises: &[
            "Seated Shoulder Press",
            "Dumbbell Lateral Raise",
            "Face Pull",
            "Front Raise",
            "Reverse Fly",
        ],
    },
    CatalogCategory {
        slug: "legs",
        name: "Legs",
        exercises: &[
            "Squat",
            "Deadlift",
            "Leg Press",
            "Hack Squat",
            "Leg Extension",
        ],
    },
    CatalogCategory {
        slug: "arms",
        name: "Arms",
        exercises: &[
            "Barbell Curl",
            "Dumbbell Curl",
            "Cable Pushdown",
            "Lying Triceps Extension",
        ],
    },
    CatalogCategory {
        slug: "core",
        name: "Core",
        exercises: &["Crunch", "Plank", "Hanging Leg Raise", "Russian Twist"],
    },
];

/// Upsert the built-in exercise catalog. Safe to run repeatedly: categories
/// upsert keyed by slug, exercises insert-or-ignore on (category, name).
/// Runs in one transaction.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for category in CATALOG {
        let category_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (slug, name) VALUES (?, ?)
            ON CONFLICT(slug) DO UPDATE SET name = excluded.name
            RETURNING id
            "#,
        )
        .bind(category.slug)
        .bind(category.name)
        .fetch_one(&mut *tx)
        .await?;

        for exercise in category.exercises {
            sqlx::query(
                "INSERT INTO exercises (name, category_id) VALUES (?, ?) \
                 ON CONFLICT(category_id, name) DO NOTHING",
            )
            .bind(exercise)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }

        tracing::info!("Seeded category: {}", category.name);
    }

    tx.commit().await?;

    Ok(())
}

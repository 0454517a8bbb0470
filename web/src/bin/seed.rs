use anyhow::Context;
use storage::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?;

    let db = Database::new(&database_url)
        .await
        .context("Failed to initialize database")?;
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Start seeding");
    storage::seed::seed_catalog(db.pool())
        .await
        .context("Failed to seed exercise catalog")?;
    tracing::info!("Seeding finished");

    Ok(())
}

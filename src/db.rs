use anyhow::Context;
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies pending migrations. Run as a deployment step, not during
/// request-serving startup.
pub async fn run_migrations(db: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR.run(db).await.context("apply migrations")?;
    tracing::info!("migrations applied");
    Ok(())
}

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use common::Error;

mod glossary;
mod subscriptions;

pub use glossary::Glossary;
pub use subscriptions::Subscriptions;

/// connects to the bot database and applies pending migrations
pub async fn connect(db_url: &str) -> Result<SqlitePool, Error> {
    let pool = SqlitePool::connect(db_url).await?;
    migrate(&pool).await?;
    log::info!("DB Migrated.");
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("../migrations").run(pool).await?;
    Ok(())
}

/// a migrated in-memory database, for tests
pub async fn memory_pool() -> Result<SqlitePool, Error> {
    // every connection to :memory: is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    migrate(&pool).await?;
    Ok(pool)
}

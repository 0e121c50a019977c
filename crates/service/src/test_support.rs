use tokio::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};
use migration::MigratorTrait;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn database_url() -> Option<String> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    std::env::var("DATABASE_URL").ok()
}

/// A fresh migrated connection, or `None` when no database is configured or reachable.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(url) = database_url() else { return Ok(None) };

    // Run migrations exactly once, with a throwaway connection
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match Database::connect(url.as_str()).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return Ok(None);
    }

    // Return a fresh connection for the current test's runtime
    let db = Database::connect(url.as_str()).await?;
    Ok(Some(db))
}

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

/// Creates the SQLite connection pool, making the database directory first
/// when the URL points at a file path.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        if let Some(dir) = std::path::Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
    }

    info!("Connecting to SQLite...");

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    run_migrations(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Idempotent schema setup, run at every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS applications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_title TEXT NOT NULL,
            company TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Not Submitted',
            match_score INTEGER NOT NULL,
            url TEXT,
            applied_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_preferences (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL UNIQUE,
            values_json TEXT NOT NULL DEFAULT '[]',
            field TEXT NOT NULL DEFAULT '',
            subfield TEXT NOT NULL DEFAULT '',
            specialization TEXT NOT NULL DEFAULT '',
            locations_json TEXT NOT NULL DEFAULT '[]',
            remote_preference INTEGER NOT NULL DEFAULT 0,
            role_level TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

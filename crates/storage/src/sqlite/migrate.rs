use sqlx::SqlitePool;
use tracing::debug;

use super::SqliteInitError;

/// Runs the versioned schema migrations.
///
/// Version 1 creates the `destinations` table; clues and trivia are stored as
/// JSON arrays in TEXT columns.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    if !is_applied(pool, 1).await? {
        debug!(version = 1, "applying schema migration");
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS destinations (
                    id INTEGER PRIMARY KEY,
                    city TEXT NOT NULL UNIQUE CHECK (length(trim(city)) > 0),
                    country TEXT,
                    clues TEXT NOT NULL,
                    fun_fact TEXT NOT NULL DEFAULT '',
                    trivia TEXT NOT NULL DEFAULT '[]',
                    image_url TEXT
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, CURRENT_TIMESTAMP)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
    }

    Ok(())
}

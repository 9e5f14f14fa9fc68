use sqlx::SqlitePool;
use tracing::{error, info};

use crate::auth::password::hash_password;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePool::connect(database_url).await.map_err(|e| {
        error!(error = %e, database_url, "Failed to connect to database");
        e
    })
}

/// Create both tables if this is a fresh database.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS absensi (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id   TEXT NOT NULL DEFAULT '',
            student_name TEXT NOT NULL DEFAULT '',
            date         TEXT NOT NULL DEFAULT '',
            time_in      TEXT NOT NULL DEFAULT '',
            time_out     TEXT NOT NULL DEFAULT '',
            status       TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seed the admin user (username "admin", password "admin") if absent.
/// Idempotent; inserts at most one row per process start.
pub async fn seed_admin(pool: &SqlitePool) -> anyhow::Result<()> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? LIMIT 1)",
    )
    .bind("admin")
    .fetch_one(pool)
    .await?;

    if exists {
        return Ok(());
    }

    let hashed = hash_password("admin")?;

    sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind("admin")
        .bind(hashed)
        .execute(pool)
        .await?;

    info!("Admin user created (username: admin, password: admin)");
    Ok(())
}

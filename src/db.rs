use std::{path::PathBuf, str::FromStr};

use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxPostgresConnector, Statement};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::fs;

use crate::config::BackendConfig;

/// Build the catalog database handle.
///
/// The endpoint carries host, role and database; the access key is applied as
/// the role's password so it never has to live inside the URL.
pub async fn connect_backend(config: &BackendConfig) -> Result<DatabaseConnection> {
    let (url, access_key) = config.require()?;
    let options = PgConnectOptions::from_str(url)?.password(access_key);
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(
        max_connections = config.max_connections,
        "catalog backend connected"
    );
    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}

/// Minimal migration runner that executes SQL files in `migrations/` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir("migrations").await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        tracing::debug!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            let statement = format!("{stmt};");
            conn.execute(Statement::from_string(backend, statement))
                .await?;
        }
    }

    Ok(())
}

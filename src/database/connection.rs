//! Configuración de conexión a SQLite
//!
//! Este módulo maneja la conexión a la base de datos SQLite
//! y la creación del schema al arrancar.

use anyhow::Result;
use sqlx::SqlitePool;

use crate::config::database::DatabaseConfig;

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cars.db".to_string()),
    };

    let config = DatabaseConfig::new(&database_url);
    let pool = config.create_pool().await?;

    Ok(pool)
}

/// Crear la tabla de coches si no existe todavía
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(250) NOT NULL UNIQUE,
            year INTEGER NOT NULL,
            description VARCHAR(500) NOT NULL,
            rating REAL NOT NULL,
            ranking INTEGER NOT NULL,
            review VARCHAR(250) NOT NULL,
            img_url VARCHAR(250) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}

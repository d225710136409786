use sqlx::SqlitePool;

use crate::models::{Car, CarChanges, NewCar};
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (name, year, description, rating, ranking, review, img_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING *
            "#,
        )
        .bind(&new_car.name)
        .bind(new_car.year)
        .bind(&new_car.description)
        .bind(new_car.rating)
        .bind(new_car.ranking)
        .bind(&new_car.review)
        .bind(&new_car.img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Respaldo por si dos inserts con el mismo nombre cruzan el pre-check
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                conflict_error("Car", "name", &new_car.name)
            }
            _ => AppError::Database(format!("Error creating car: {}", e)),
        })?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding car: {}", e)))?;

        Ok(car)
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY ranking, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing cars: {}", e)))?;

        Ok(cars)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cars WHERE name = ?1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking name: {}", e)))?;

        Ok(result.0)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting cars: {}", e)))?;

        Ok(result.0)
    }

    pub async fn update(&self, id: i64, changes: CarChanges) -> Result<Car, AppError> {
        // Obtener coche actual; los campos sin cambio conservan su valor
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET rating = ?2, review = ?3, img_url = ?4
            WHERE id = ?1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.rating.unwrap_or(current.rating))
        .bind(changes.review.unwrap_or(current.review))
        .bind(changes.img_url.unwrap_or(current.img_url))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating car: {}", e)))?;

        Ok(car)
    }

    pub async fn update_rankings(&self, assignments: &[(i64, i64)]) -> Result<(), AppError> {
        for &(id, ranking) in assignments {
            sqlx::query("UPDATE cars SET ranking = ?2 WHERE id = ?1")
                .bind(id)
                .bind(ranking)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error updating ranking: {}", e)))?;
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cars WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting car: {}", e)))?;

        Ok(())
    }
}

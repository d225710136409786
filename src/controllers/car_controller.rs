//! Controller de coches
//!
//! Implementa los flujos de la aplicación: listado con recálculo de
//! ranking, alta con política de unicidad, edición parcial y borrado.

use std::cmp::Ordering;

use sqlx::SqlitePool;

use crate::models::{Car, CarChanges, NewCar};
use crate::repositories::CarRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    /// Listado ordenado: recalcula el ranking de todos los coches.
    ///
    /// El ranking es una proyección derivada del rating: en cada lectura
    /// del listado se reordena el conjunto completo por rating descendente,
    /// se renumera 1..n y se persiste antes de renderizar. Entre lecturas
    /// el valor almacenado puede quedar obsoleto.
    pub async fn list_ranked(&self) -> Result<Vec<Car>, AppError> {
        let mut cars = self.repository.find_all().await?;
        let assignments = compute_rankings(&mut cars);
        self.repository.update_rankings(&assignments).await?;
        Ok(cars)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Car, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))
    }

    pub async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        // Verificar que el nombre no exista todavía
        if self.repository.name_exists(&new_car.name).await? {
            return Err(conflict_error("Car", "name", &new_car.name));
        }

        self.repository.create(new_car).await
    }

    pub async fn update(&self, id: i64, changes: CarChanges) -> Result<Car, AppError> {
        self.repository.update(id, changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Borrar un id desconocido es NotFound, nunca un no-op silencioso
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        self.repository.delete(id).await
    }
}

/// Reordenar los coches por rating descendente y renumerar 1..n.
///
/// El sort es estable: a igual rating se conserva el orden previo.
/// Devuelve los pares (id, ranking) a persistir.
pub fn compute_rankings(cars: &mut [Car]) -> Vec<(i64, i64)> {
    cars.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));

    cars.iter_mut()
        .enumerate()
        .map(|(index, car)| {
            car.ranking = (index + 1) as i64;
            (car.id, car.ranking)
        })
        .collect()
}

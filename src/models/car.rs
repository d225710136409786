//! Modelo de Car
//!
//! Este módulo contiene el struct Car y sus variantes para CRUD operations.
//! Mapea exactamente al schema SQLite con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub year: i64,
    pub description: String,
    pub rating: f64,
    pub ranking: i64,
    pub review: String,
    pub img_url: String,
}

/// Datos para insertar un coche nuevo (el id lo asigna la base de datos)
#[derive(Debug, Clone)]
pub struct NewCar {
    pub name: String,
    pub year: i64,
    pub description: String,
    pub rating: f64,
    pub ranking: i64,
    pub review: String,
    pub img_url: String,
}

/// Cambios parciales sobre un coche existente.
///
/// Un campo en `None` significa "no tocar el valor almacenado";
/// solo los campos en `Some` se escriben.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarChanges {
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub img_url: Option<String>,
}

impl CarChanges {
    /// Verificar si no hay ningún campo que escribir
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.review.is_none() && self.img_url.is_none()
    }
}

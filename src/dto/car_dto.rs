//! DTOs de los formularios de coches
//!
//! Los formularios llegan como application/x-www-form-urlencoded con todos
//! los campos en texto. La conversión a tipos numéricos y la política
//! "campo vacío = no tocar" del formulario de edición viven aquí.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::{CarChanges, NewCar};
use crate::utils::validation::{parse_rating, parse_year, validate_not_empty};

/// Query param para identificar el coche objetivo en /edit y /delete
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// Formulario de alta de un coche - todos los campos son requeridos
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddCarForm {
    #[serde(default)]
    #[validate(length(max = 250, message = "Must be at most 250 characters"))]
    pub name: String,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub rating: String,

    #[serde(default)]
    #[validate(length(max = 250, message = "Must be at most 250 characters"))]
    pub comment: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Must be at most 500 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 250, message = "Must be at most 250 characters"))]
    pub img_url: String,
}

impl AddCarForm {
    /// Validar el formulario completo y construir el coche a insertar.
    ///
    /// El campo `comment` del formulario mapea a la columna `review`.
    /// El ranking se fuerza a 1; el valor real se recalcula al listar.
    pub fn to_new_car(&self) -> Result<NewCar, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        let required: [(&'static str, &str); 6] = [
            ("name", &self.name),
            ("year", &self.year),
            ("rating", &self.rating),
            ("comment", &self.comment),
            ("description", &self.description),
            ("img_url", &self.img_url),
        ];
        for (field, value) in required {
            if let Err(e) = validate_not_empty(value) {
                errors.add(field, e);
            }
        }

        // Los parses solo se intentan con valor presente; el error de
        // campo requerido ya quedó registrado arriba.
        let year = match non_empty(&self.year).map(parse_year) {
            Some(Ok(year)) => year,
            Some(Err(e)) => {
                errors.add("year", e);
                0
            }
            None => 0,
        };
        let rating = match non_empty(&self.rating).map(parse_rating) {
            Some(Ok(rating)) => rating,
            Some(Err(e)) => {
                errors.add("rating", e);
                0.0
            }
            None => 0.0,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewCar {
            name: self.name.trim().to_string(),
            year,
            description: self.description.trim().to_string(),
            rating,
            ranking: 1,
            review: self.comment.trim().to_string(),
            img_url: self.img_url.trim().to_string(),
        })
    }
}

/// Formulario de edición parcial - los tres campos son opcionales
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditCarForm {
    #[serde(default)]
    pub rating: String,

    #[serde(default)]
    #[validate(length(max = 250, message = "Must be at most 250 characters"))]
    pub comment: String,

    #[serde(default)]
    #[validate(length(max = 250, message = "Must be at most 250 characters"))]
    pub img_link: String,
}

impl EditCarForm {
    /// Convertir el formulario en cambios parciales.
    ///
    /// Cada campo enviado vacío queda fuera de los cambios y conserva el
    /// valor almacenado. `comment` mapea a `review` e `img_link` a `img_url`.
    pub fn to_changes(&self) -> Result<CarChanges, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        let rating = match non_empty(&self.rating).map(parse_rating) {
            Some(Ok(rating)) => Some(rating),
            Some(Err(e)) => {
                errors.add("rating", e);
                None
            }
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CarChanges {
            rating,
            review: non_empty(&self.comment).map(str::to_string),
            img_url: non_empty(&self.img_link).map(str::to_string),
        })
    }
}

/// Política "skip-if-absent": un valor en blanco cuenta como ausente
fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> AddCarForm {
        AddCarForm {
            name: "McLaren P1".to_string(),
            year: "2013".to_string(),
            rating: "9.5".to_string(),
            comment: "Brutal".to_string(),
            description: "Hybrid hypercar".to_string(),
            img_url: "https://example.com/p1.jpg".to_string(),
        }
    }

    #[test]
    fn test_add_form_valid() {
        let new_car = full_form().to_new_car().unwrap();
        assert_eq!(new_car.name, "McLaren P1");
        assert_eq!(new_car.year, 2013);
        assert_eq!(new_car.rating, 9.5);
        assert_eq!(new_car.review, "Brutal");
        assert_eq!(new_car.ranking, 1);
    }

    #[test]
    fn test_add_form_missing_fields() {
        let form = AddCarForm::default();
        let errors = form.to_new_car().unwrap_err();
        for field in ["name", "year", "rating", "comment", "description", "img_url"] {
            assert!(errors.field_errors().contains_key(field), "missing {}", field);
        }
    }

    #[test]
    fn test_add_form_bad_year_and_rating() {
        let mut form = full_form();
        form.year = "dos mil".to_string();
        form.rating = "diez".to_string();
        let errors = form.to_new_car().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_add_form_name_too_long() {
        let mut form = full_form();
        form.name = "x".repeat(251);
        let errors = form.to_new_car().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_edit_form_all_blank_changes_nothing() {
        let changes = EditCarForm::default().to_changes().unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_edit_form_each_field_is_independent() {
        let form = EditCarForm {
            rating: "9.6".to_string(),
            comment: String::new(),
            img_link: String::new(),
        };
        let changes = form.to_changes().unwrap();
        assert_eq!(changes.rating, Some(9.6));
        assert_eq!(changes.review, None);
        assert_eq!(changes.img_url, None);

        let form = EditCarForm {
            rating: String::new(),
            comment: "Nuevo comentario".to_string(),
            img_link: String::new(),
        };
        let changes = form.to_changes().unwrap();
        assert_eq!(changes.rating, None);
        assert_eq!(changes.review, Some("Nuevo comentario".to_string()));
        assert_eq!(changes.img_url, None);
    }

    #[test]
    fn test_edit_form_bad_rating() {
        let form = EditCarForm {
            rating: "not-a-number".to_string(),
            comment: String::new(),
            img_link: String::new(),
        };
        let errors = form.to_changes().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_non_empty_treats_whitespace_as_absent() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" 9.5 "), Some("9.5"));
    }
}

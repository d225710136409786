//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos de los formularios.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.message = Some("This field is required".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.message = Some(format!("Must be between {} and {} characters", min, max).into());
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a año (entero)
pub fn parse_year(value: &str) -> Result<i64, ValidationError> {
    value.trim().parse::<i64>().map_err(|_| {
        let mut error = ValidationError::new("year");
        error.message = Some("Year must be a whole number".into());
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a puntuación (flotante)
pub fn parse_rating(value: &str) -> Result<f64, ValidationError> {
    let rating = value.trim().parse::<f64>().map_err(|_| {
        let mut error = ValidationError::new("rating");
        error.message = Some("Rating must be a number, e.g. 9.5".into());
        error.add_param("value".into(), &value.to_string());
        error
    })?;

    if !rating.is_finite() {
        let mut error = ValidationError::new("rating");
        error.message = Some("Rating must be a finite number".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }

    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("test").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2013").unwrap(), 2013);
        assert_eq!(parse_year(" 1998 ").unwrap(), 1998);
        assert!(parse_year("dos mil").is_err());
        assert!(parse_year("2013.5").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("9.5").unwrap(), 9.5);
        assert_eq!(parse_rating("10").unwrap(), 10.0);
        assert!(parse_rating("diez").is_err());
        assert!(parse_rating("NaN").is_err());
        assert!(parse_rating("inf").is_err());
    }
}

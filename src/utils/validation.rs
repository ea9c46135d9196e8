use crate::utils::error::{FilterError, Result};
use std::collections::HashSet;

pub const OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FilterError::invalid_value(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(FilterError::invalid_value(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FilterError::invalid_value(
            field_name,
            value,
            &format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FilterError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Times and distances are never negative, and NaN or infinity would print as nonsense.
pub fn validate_finite_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FilterError::invalid_value(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(FilterError::invalid_value(
            field_name,
            value,
            "Value must be non-negative",
        ));
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(FilterError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let allowed: HashSet<&str> = OUTPUT_FORMATS.iter().copied().collect();
    for format in formats {
        if !allowed.contains(format.as_str()) {
            return Err(FilterError::invalid_value(
                field_name,
                format,
                &format!(
                    "Unsupported format. Valid formats: {}",
                    OUTPUT_FORMATS.join(", ")
                ),
            ));
        }
    }

    Ok(())
}

/// Validates every item, prefixing a failing field with `label[index].`.
pub fn validate_each<T: Validate>(label: &str, items: &[T]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|e| match e {
            FilterError::InvalidValueError {
                field,
                value,
                reason,
            } => FilterError::InvalidValueError {
                field: format!("{}[{}].{}", label, index, field),
                value,
                reason,
            },
            other => other,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_finite_non_negative() {
        assert!(validate_finite_non_negative("seconds", 0.0).is_ok());
        assert!(validate_finite_non_negative("seconds", 115.05).is_ok());
        assert!(validate_finite_non_negative("seconds", -0.01).is_err());
        assert!(validate_finite_non_negative("seconds", f64::NAN).is_err());
        assert!(validate_finite_non_negative("seconds", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("seconds", 5.0, 0.0, 10.0).is_ok());
        assert!(validate_range("seconds", 10.5, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_output_formats("formats", &invalid).is_err());

        assert!(matches!(
            validate_output_formats("formats", &[]),
            Err(FilterError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("event.name", "60m").is_ok());
        assert!(validate_non_empty_string("event.name", "   ").is_err());
    }
}

use crate::utils::error::{SolidError, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SolidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects the first value that appears twice.
pub fn validate_unique<T>(field_name: &str, values: &[T]) -> Result<()>
where
    T: Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(SolidError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "solid.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "   ").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("principles", &["S", "O"]).is_ok());
        assert!(validate_unique::<&str>("principles", &[]).is_ok());

        match validate_unique("principles", &["S", "O", "S"]) {
            Err(SolidError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "principles");
                assert_eq!(value, "S");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }
}

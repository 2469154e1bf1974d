//! Construction-time validation shared by model entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for model constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Name is empty after trimming.
    BlankName,
    /// Base salary is negative, NaN or infinite.
    InvalidBaseSalary(f64),
    /// Budget is zero, negative, NaN or infinite.
    InvalidBudget(f64),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::InvalidBaseSalary(value) => {
                write!(f, "base salary must be a finite non-negative amount, got {value}")
            }
            Self::InvalidBudget(value) => {
                write!(f, "budget must be a finite positive amount, got {value}")
            }
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn normalize_name(value: String) -> Result<String, ModelValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelValidationError::BlankName);
    }
    if trimmed.len() == value.len() {
        return Ok(value);
    }
    Ok(trimmed.to_string())
}

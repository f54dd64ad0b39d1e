//! Error types for input validation and report export

use thiserror::Error;

/// Rejected calculation input.
///
/// Raised before any simulation work starts, so an engine never produces
/// NaN or infinite figures from bad parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("best case ({best}%) must be greater than or equal to worst case ({worst}%)")]
    InvertedRange { worst: f64, best: f64 },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("{field} must be at most {limit} (got {value})")]
    TooLarge { field: &'static str, value: u64, limit: u64 },
}

/// Failure while exporting an already calculated result.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no device named '{0}' in the calculated result")]
    UnknownDevice(String),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject NaN and infinities for a named field.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NotFinite { field })
    }
}

/// Reject non-finite and negative values for a named field.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

/// Reject values outside `[min, max]` for a named field.
pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InputError> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(InputError::OutOfRange { field, value, min, max });
    }
    Ok(())
}

/// Reject counts above `limit` for a named field.
pub(crate) fn require_at_most(field: &'static str, value: u64, limit: u64) -> Result<(), InputError> {
    if value > limit {
        return Err(InputError::TooLarge { field, value, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("principal", 0.0).is_ok());
        assert!(require_non_negative("principal", 12.5).is_ok());
        assert_eq!(
            require_non_negative("principal", -1.0),
            Err(InputError::Negative { field: "principal", value: -1.0 })
        );
        assert_eq!(
            require_non_negative("principal", f64::NAN),
            Err(InputError::NotFinite { field: "principal" })
        );
    }

    #[test]
    fn test_require_in_range() {
        assert!(require_in_range("rate", 100.0, -100.0, 100.0).is_ok());
        assert!(require_in_range("rate", -100.0, -100.0, 100.0).is_ok());
        assert_eq!(
            require_in_range("rate", 100.5, -100.0, 100.0),
            Err(InputError::OutOfRange { field: "rate", value: 100.5, min: -100.0, max: 100.0 })
        );
        assert_eq!(
            require_in_range("rate", f64::NEG_INFINITY, -100.0, 100.0),
            Err(InputError::NotFinite { field: "rate" })
        );
    }

    #[test]
    fn test_require_at_most() {
        assert!(require_at_most("days", 10, 10).is_ok());
        assert_eq!(
            require_at_most("days", 11, 10),
            Err(InputError::TooLarge { field: "days", value: 11, limit: 10 })
        );
    }

    #[test]
    fn test_messages() {
        let err = InputError::InvertedRange { worst: 5.0, best: 2.0 };
        assert_eq!(
            err.to_string(),
            "best case (2%) must be greater than or equal to worst case (5%)"
        );
        let err = ExportError::UnknownDevice("Device 9".to_string());
        assert_eq!(err.to_string(), "no device named 'Device 9' in the calculated result");
    }
}

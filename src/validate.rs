//! Input validators for srcset width ranges and explicit width lists.
//!
//! All validators run before any URL is generated, so a failed check never
//! leaves partial srcset output behind.

use crate::constants::MIN_WIDTH_TOLERANCE;
use crate::error::ValidationError;

/// Ensure the beginning width of a range is not negative.
pub fn validate_min_width(begin: i32) -> Result<(), ValidationError> {
    if begin < 0 {
        return Err(ValidationError::NegativeBeginWidth { begin });
    }
    Ok(())
}

/// Ensure the ending width of a range is not negative.
pub fn validate_max_width(end: i32) -> Result<(), ValidationError> {
    if end < 0 {
        return Err(ValidationError::NegativeEndWidth { end });
    }
    Ok(())
}

/// Ensure `begin..=end` is a well-formed width range.
pub fn validate_range(begin: i32, end: i32) -> Result<(), ValidationError> {
    validate_min_width(begin)?;
    validate_max_width(end)?;

    if end < begin {
        return Err(ValidationError::InvalidWidthRange { begin, end });
    }
    Ok(())
}

/// Ensure the tolerance is at least one percent.
pub fn validate_tolerance(tolerance: f64) -> Result<(), ValidationError> {
    if tolerance < MIN_WIDTH_TOLERANCE {
        return Err(ValidationError::InvalidTolerance { tolerance });
    }
    Ok(())
}

/// Composite check used by the ladder generator.
pub fn validate_range_and_tolerance(
    begin: i32,
    end: i32,
    tolerance: f64,
) -> Result<(), ValidationError> {
    validate_range(begin, end)?;
    validate_tolerance(tolerance)
}

/// Ensure an explicit width list is non-empty and free of negative values.
pub fn validate_widths(widths: &[i32]) -> Result<(), ValidationError> {
    if widths.is_empty() {
        return Err(ValidationError::EmptyWidthList);
    }

    for &width in widths {
        if width < 0 {
            return Err(ValidationError::NegativeWidth { width });
        }
    }
    Ok(())
}

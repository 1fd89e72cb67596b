//! Profile input validation
//!
//! Hard invariants are enforced here and surfaced as
//! [`AssessmentError::MalformedProfile`]; optional lifestyle fields only need
//! to be finite and non-negative. Soft gaps in a profile are handled with
//! defaults downstream, never as errors.

use crate::errors::{AssessmentError, AssessmentResult};

/// Validate height value (in cm)
///
/// Must be strictly positive: BMI divides by height squared.
pub fn validate_height_cm(height_cm: f64) -> AssessmentResult<()> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err(AssessmentError::malformed(
            "height_cm",
            "must be a valid number",
        ));
    }
    if height_cm <= 0.0 {
        return Err(AssessmentError::malformed(
            "height_cm",
            "must be strictly positive",
        ));
    }
    Ok(())
}

/// Validate weight value (in kg)
///
/// Must be strictly positive.
pub fn validate_weight_kg(weight_kg: f64) -> AssessmentResult<()> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(AssessmentError::malformed(
            "weight_kg",
            "must be a valid number",
        ));
    }
    if weight_kg <= 0.0 {
        return Err(AssessmentError::malformed(
            "weight_kg",
            "must be strictly positive",
        ));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age_years: i32) -> AssessmentResult<()> {
    if age_years < 0 {
        return Err(AssessmentError::malformed("age", "cannot be negative"));
    }
    Ok(())
}

/// Validate a non-negative measurement field
///
/// Used for waist circumference, caffeine intake, and alcohol intake.
pub fn validate_non_negative(field: &str, value: f64) -> AssessmentResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(AssessmentError::malformed(field, "must be a valid number"));
    }
    if value < 0.0 {
        return Err(AssessmentError::malformed(field, "cannot be negative"));
    }
    Ok(())
}

/// Validate meal compliance (a fraction in [0, 1])
pub fn validate_meal_compliance(compliance: f64) -> AssessmentResult<()> {
    if compliance.is_nan() || compliance.is_infinite() {
        return Err(AssessmentError::malformed(
            "meal_compliance",
            "must be a valid number",
        ));
    }
    if !(0.0..=1.0).contains(&compliance) {
        return Err(AssessmentError::malformed(
            "meal_compliance",
            "must be between 0 and 1",
        ));
    }
    Ok(())
}

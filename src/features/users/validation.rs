//! Per-field input rules for the user form.
//!
//! The age check is deliberately loose: anything that parses as a finite
//! decimal number after trimming is numeric, so `" 30 "`, `"3e1"`, `"+30"` and
//! `"29.5"` all pass while `"0x1e"` and whitespace-only input do not.

use thiserror::Error;

/// Inclusive age bounds.
pub const MIN_AGE: f64 = 0.0;
pub const MAX_AGE: f64 = 99.0;

/// Inline message shown under the age input.
pub const AGE_ERROR_MESSAGE: &str = "Por favor, ingresa un número válido para la edad (0-99).";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AgeError {
    #[error("{}", AGE_ERROR_MESSAGE)]
    NotNumeric,
    #[error("{}", AGE_ERROR_MESSAGE)]
    OutOfRange(f64),
}

/// Accepts empty input or a number within [`MIN_AGE`, `MAX_AGE`].
pub fn validate_age(value: &str) -> Result<(), AgeError> {
    if value.is_empty() {
        return Ok(());
    }

    let number = parse_loose_number(value).ok_or(AgeError::NotNumeric)?;
    if (MIN_AGE..=MAX_AGE).contains(&number) {
        Ok(())
    } else {
        Err(AgeError::OutOfRange(number))
    }
}

fn parse_loose_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

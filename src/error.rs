//! Error types for the calculator.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which input was rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Luck,
    Throughput,
    ManualOdds,
    Target,
    EffectiveOdds,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Luck => "luck multiplier",
            InputField::Throughput => "casts per hour",
            InputField::ManualOdds => "manual odds",
            InputField::Target => "target probability",
            InputField::EffectiveOdds => "effective odds",
        }
    }

    /// What an accepted value looks like, for error messages.
    pub fn requirement(&self) -> &'static str {
        match self {
            InputField::EffectiveOdds => "a finite number no larger than 1e17",
            _ => "a positive number",
        }
    }
}

/// A numeric input the engine refuses to compute with.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
#[error("{} must be {}, got {value}", .field.as_str(), .field.requirement())]
pub struct InvalidInput {
    pub field: InputField,
    pub value: f64,
}

impl InvalidInput {
    pub fn new(field: InputField, value: f64) -> Self {
        Self { field, value }
    }

    /// Accepts `value` only if it is finite and strictly positive.
    pub fn check_positive(field: InputField, value: f64) -> Result<f64, InvalidInput> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::new(field, value))
        }
    }
}

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("odds are unknown, no estimate possible")]
    UnknownOdds,

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("no fish named '{0}' in the catalog")]
    UnknownFish(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}

impl CalcError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CalcError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive_accepts_positive() {
        assert_eq!(InvalidInput::check_positive(InputField::Luck, 2.5), Ok(2.5));
    }

    #[test]
    fn test_check_positive_rejects_zero_negative_and_nan() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = InvalidInput::check_positive(InputField::Throughput, bad).unwrap_err();
            assert_eq!(err.field, InputField::Throughput);
        }
    }

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = InvalidInput::new(InputField::Luck, 0.0);
        assert_eq!(err.to_string(), "luck multiplier must be a positive number, got 0");
    }

    #[test]
    fn test_effective_odds_message_names_bound() {
        let err = InvalidInput::new(InputField::EffectiveOdds, f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "effective odds must be a finite number no larger than 1e17, got inf"
        );
    }

    #[test]
    fn test_calc_error_wraps_invalid_input() {
        let err: CalcError = InvalidInput::new(InputField::ManualOdds, -5.0).into();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("manual odds"));
    }
}

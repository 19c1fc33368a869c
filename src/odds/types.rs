//! Odds value types.

use serde::{Deserialize, Serialize};

use crate::error::{InputField, InvalidInput};

/// Base odds of a catch, as "1 chance in n" per cast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "n", rename_all = "snake_case")]
pub enum OddsSpec {
    /// No estimate is possible (placeholder odds, unparsable text).
    Unknown,
    /// 1 in `n`, with `n > 0`.
    Denominator(f64),
}

impl OddsSpec {
    /// Builds a denominator, falling back to `Unknown` for anything that is
    /// not a finite positive number.
    pub fn denominator(n: f64) -> Self {
        if n.is_finite() && n > 0.0 {
            OddsSpec::Denominator(n)
        } else {
            OddsSpec::Unknown
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, OddsSpec::Denominator(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            OddsSpec::Unknown => None,
            OddsSpec::Denominator(n) => Some(*n),
        }
    }
}

/// Where the base odds for an evaluation come from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddsSource {
    /// Odds parsed from the selected catalog entry.
    Catalog(OddsSpec),
    /// A denominator typed in by the user.
    Manual(f64),
}

impl OddsSource {
    /// Picks the manual value when present, otherwise the catalog odds.
    /// With neither available the source is unknown catalog odds.
    pub fn prefer(manual: Option<f64>, catalog: Option<OddsSpec>) -> Self {
        match (manual, catalog) {
            (Some(n), _) => OddsSource::Manual(n),
            (None, Some(spec)) => OddsSource::Catalog(spec),
            (None, None) => OddsSource::Catalog(OddsSpec::Unknown),
        }
    }

    /// Resolves to base odds. A manual value must be positive; catalog odds
    /// pass through as-is, including `Unknown`.
    pub fn resolve(&self) -> Result<OddsSpec, InvalidInput> {
        match *self {
            OddsSource::Catalog(spec) => Ok(spec),
            OddsSource::Manual(n) => {
                InvalidInput::check_positive(InputField::ManualOdds, n).map(OddsSpec::Denominator)
            }
        }
    }
}

impl Default for OddsSource {
    fn default() -> Self {
        OddsSource::Catalog(OddsSpec::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominator_rejects_non_positive() {
        assert_eq!(OddsSpec::denominator(0.0), OddsSpec::Unknown);
        assert_eq!(OddsSpec::denominator(-3.0), OddsSpec::Unknown);
        assert_eq!(OddsSpec::denominator(f64::NAN), OddsSpec::Unknown);
        assert_eq!(OddsSpec::denominator(40.0), OddsSpec::Denominator(40.0));
    }

    #[test]
    fn test_manual_takes_precedence() {
        let source = OddsSource::prefer(Some(250.0), Some(OddsSpec::Denominator(1000.0)));
        assert_eq!(source, OddsSource::Manual(250.0));
        assert_eq!(source.resolve(), Ok(OddsSpec::Denominator(250.0)));
    }

    #[test]
    fn test_catalog_used_without_manual() {
        let source = OddsSource::prefer(None, Some(OddsSpec::Denominator(1000.0)));
        assert_eq!(source.resolve(), Ok(OddsSpec::Denominator(1000.0)));
    }

    #[test]
    fn test_nothing_selected_is_unknown() {
        assert_eq!(OddsSource::prefer(None, None).resolve(), Ok(OddsSpec::Unknown));
    }

    #[test]
    fn test_non_positive_manual_is_rejected() {
        let err = OddsSource::Manual(0.0).resolve().unwrap_err();
        assert_eq!(err.field, InputField::ManualOdds);
    }
}

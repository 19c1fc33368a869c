//! Probability model for independent casts with constant odds.
//!
//! Each cast succeeds with probability `1 / effective_odds`, so the number of
//! casts until the first catch is geometric.

use tracing::warn;

use crate::error::{InputField, InvalidInput};
use crate::odds::OddsSpec;

/// Effective odds below this would mean more than one catch per cast.
pub const MIN_EFFECTIVE_ODDS: f64 = 1.0;

/// Largest effective odds the solver accepts. Any target below 1 needs at
/// most ~37x the odds in casts, which keeps every count inside `u64`.
pub const MAX_EFFECTIVE_ODDS: f64 = 1e17;

/// Applies the luck multiplier to base odds.
///
/// Returns `Ok(None)` for unknown odds and rejects a luck multiplier that is
/// not a finite positive number. Results below 1 are clamped to 1; results
/// above `MAX_EFFECTIVE_ODDS` (including an overflow to infinity) are rejected.
pub fn effective_odds(base: OddsSpec, luck: f64) -> Result<Option<f64>, InvalidInput> {
    let luck = InvalidInput::check_positive(InputField::Luck, luck).inspect_err(|err| {
        warn!(value = err.value, "rejected luck multiplier");
    })?;

    base.value()
        .map(|n| check_effective_odds((n / luck).max(MIN_EFFECTIVE_ODDS)))
        .transpose()
}

/// Accepts effective odds in `[MIN_EFFECTIVE_ODDS, MAX_EFFECTIVE_ODDS]`.
pub fn check_effective_odds(odds: f64) -> Result<f64, InvalidInput> {
    if (MIN_EFFECTIVE_ODDS..=MAX_EFFECTIVE_ODDS).contains(&odds) {
        Ok(odds)
    } else {
        warn!(value = odds, "effective odds out of range");
        Err(InvalidInput::new(InputField::EffectiveOdds, odds))
    }
}

/// Chance that a single cast succeeds, in `(0, 1]`.
pub fn chance_per_attempt(effective_odds: f64) -> f64 {
    1.0 / effective_odds.max(MIN_EFFECTIVE_ODDS)
}

/// Mean casts until the first catch.
pub fn expected_attempts(effective_odds: f64) -> f64 {
    effective_odds.max(MIN_EFFECTIVE_ODDS)
}

/// Probability of at least one catch within `n` casts: `1 - (1 - 1/odds)^n`.
///
/// Evaluated as `-expm1(n * ln_1p(-1/odds))` so that huge odds don't round
/// `1 - 1/odds` to exactly 1.
pub fn probability_after(n: u64, effective_odds: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    if effective_odds <= MIN_EFFECTIVE_ODDS {
        return 1.0;
    }

    let per_cast_miss = (-1.0 / effective_odds).ln_1p();
    (-(n as f64 * per_cast_miss).exp_m1()).clamp(0.0, 1.0)
}

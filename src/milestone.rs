//! Milestone solver: minimum casts to reach a target catch probability.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::InvalidInput;
use crate::model::{check_effective_odds, probability_after, MIN_EFFECTIVE_ODDS};

/// Targets reported by default: 50%, 90% and 99%.
pub const CANONICAL_TARGETS: [f64; 3] = [0.50, 0.90, 0.99];

/// Largest count the ceiling correction still works on exactly (2^53).
const EXACT_COUNT_LIMIT: u64 = 1 << 53;

/// Number of casts needed for a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attempts {
    Finite(u64),
    /// No finite number of casts reaches the target.
    Unbounded,
}

impl Attempts {
    pub fn finite(&self) -> Option<u64> {
        match self {
            Attempts::Finite(n) => Some(*n),
            Attempts::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Attempts::Unbounded)
    }
}

/// A target probability with the casts and hours it takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMilestone {
    pub target: f64,
    pub attempts: Attempts,
    /// `None` exactly when `attempts` is unbounded.
    pub hours: Option<f64>,
}

impl ProbabilityMilestone {
    pub fn solve(target: f64, effective_odds: f64, throughput: f64) -> Result<Self, InvalidInput> {
        let attempts = attempts_for_probability(target, effective_odds)?;
        let hours = hours_for_attempts(attempts, throughput);
        trace!(probability = target, effective_odds, ?attempts, "solved milestone");
        Ok(Self {
            target,
            attempts,
            hours,
        })
    }
}

/// Minimum casts `n` with `probability_after(n) >= target`.
///
/// `target >= 1` is unbounded and `target <= 0` needs no casts. At effective
/// odds of 1 every cast succeeds, so one cast reaches any target below 1.
/// Effective odds outside `[1, MAX_EFFECTIVE_ODDS]` are rejected.
pub fn attempts_for_probability(target: f64, effective_odds: f64) -> Result<Attempts, InvalidInput> {
    let effective_odds = check_effective_odds(effective_odds)?;
    if !(target < 1.0) {
        return Ok(Attempts::Unbounded);
    }
    if target <= 0.0 {
        return Ok(Attempts::Finite(0));
    }
    if effective_odds <= MIN_EFFECTIVE_ODDS {
        return Ok(Attempts::Finite(1));
    }

    // Bounded odds keep this finite and below u64::MAX: the numerator is at
    // least ln(2^-53) and the denominator at most -1/MAX_EFFECTIVE_ODDS.
    let per_cast_miss = (-1.0 / effective_odds).ln_1p();
    let estimate = ((-target).ln_1p() / per_cast_miss).ceil();

    let mut n = (estimate as u64).max(1);
    if n < EXACT_COUNT_LIMIT {
        n = tighten(n, target, effective_odds);
    }
    Ok(Attempts::Finite(n))
}

/// Nudges a ceiling that rounding left one cast off the true minimum.
fn tighten(mut n: u64, target: f64, effective_odds: f64) -> u64 {
    for _ in 0..4 {
        if probability_after(n, effective_odds) < target {
            n += 1;
        } else if n > 1 && probability_after(n - 1, effective_odds) >= target {
            n -= 1;
        } else {
            break;
        }
    }
    n
}

/// Hours needed for `attempts` at `throughput` casts per hour.
pub fn hours_for_attempts(attempts: Attempts, throughput: f64) -> Option<f64> {
    attempts.finite().map(|n| n as f64 / throughput)
}

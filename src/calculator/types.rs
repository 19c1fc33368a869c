//! Calculator input and output types.

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::milestone::{ProbabilityMilestone, CANONICAL_TARGETS};
use crate::odds::OddsSource;

/// Default luck multiplier (no bonus).
pub const DEFAULT_LUCK: f64 = 1.0;

/// Default casts per hour.
pub const DEFAULT_THROUGHPUT: f64 = 300.0;

/// Everything one evaluation depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub odds: OddsSource,
    pub luck: f64,
    /// Casts per hour.
    pub throughput: f64,
    pub targets: Vec<f64>,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            odds: OddsSource::default(),
            luck: DEFAULT_LUCK,
            throughput: DEFAULT_THROUGHPUT,
            targets: CANONICAL_TARGETS.to_vec(),
        }
    }
}

impl CalculationInput {
    pub fn new(odds: OddsSource) -> Self {
        Self {
            odds,
            ..Default::default()
        }
    }

    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = luck;
        self
    }

    pub fn with_throughput(mut self, throughput: f64) -> Self {
        self.throughput = throughput;
        self
    }

    pub fn with_targets(mut self, targets: Vec<f64>) -> Self {
        self.targets = targets;
        self
    }
}

/// Estimate for one input tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub base_odds: f64,
    pub luck: f64,
    pub throughput: f64,
    pub effective_odds: f64,
    pub chance_per_attempt: f64,
    pub expected_attempts: f64,
    pub milestones: Vec<ProbabilityMilestone>,
}

impl CalculationResult {
    /// Milestone for `target`, if it was evaluated.
    pub fn milestone(&self, target: f64) -> Option<&ProbabilityMilestone> {
        self.milestones.iter().find(|m| m.target == target)
    }

    /// Hours until the expected (mean) catch.
    pub fn expected_hours(&self) -> f64 {
        self.expected_attempts / self.throughput
    }
}

/// What the caller renders after an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Ready(CalculationResult),
    /// Odds are unknown; nothing to estimate.
    NoEstimate,
    /// An input was rejected before any math ran.
    Rejected(InvalidInput),
}

impl Outcome {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Outcome::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }
}

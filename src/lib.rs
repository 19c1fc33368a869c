//! Catch Odds - RNG Calculator Library
//!
//! Closed-form catch-probability estimator: turns a fish's base odds, a luck
//! multiplier and a cast rate into success curves and attempt/time milestones.

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod milestone;
pub mod model;
pub mod odds;
pub mod report;

pub use calculator::{evaluate, CalculationInput, CalculationResult, Calculator, Outcome};
pub use catalog::{Catalog, FishRecord, Rarity};
pub use config::CalculatorConfig;
pub use duration::DurationPolicy;
pub use error::{CalcError, InvalidInput};
pub use milestone::{Attempts, ProbabilityMilestone, CANONICAL_TARGETS};
pub use odds::{parse, OddsSource, OddsSpec};
pub use report::Report;

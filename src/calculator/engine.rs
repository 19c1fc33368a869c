//! Evaluation pipeline: odds resolution, probability model, milestones.

use tracing::{debug, warn};

use super::types::{CalculationInput, CalculationResult, Outcome};
use crate::error::{CalcError, InputField, InvalidInput};
use crate::milestone::ProbabilityMilestone;
use crate::model;
use crate::odds::OddsSpec;

/// Evaluates one input tuple from scratch.
///
/// Unknown odds and rejected inputs come back as `Outcome` variants rather
/// than errors; callers only have to render them.
pub fn evaluate(input: &CalculationInput) -> Outcome {
    match compute(input) {
        Ok(Some(result)) => Outcome::Ready(result),
        Ok(None) => Outcome::NoEstimate,
        Err(err) => {
            warn!(field = err.field.as_str(), value = err.value, "input rejected");
            Outcome::Rejected(err)
        }
    }
}

/// Same pipeline as `evaluate`, reporting unknown odds as
/// `CalcError::UnknownOdds`.
pub fn try_evaluate(input: &CalculationInput) -> Result<CalculationResult, CalcError> {
    compute(input)?.ok_or(CalcError::UnknownOdds)
}

/// Runs the pipeline; `Ok(None)` means the odds are unknown.
fn compute(input: &CalculationInput) -> Result<Option<CalculationResult>, InvalidInput> {
    let (base, luck, throughput) = validate(input)?;

    let base_odds = match base {
        OddsSpec::Denominator(n) => n,
        OddsSpec::Unknown => return Ok(None),
    };
    let Some(effective_odds) = model::effective_odds(base, luck)? else {
        return Ok(None);
    };

    let milestones = input
        .targets
        .iter()
        .map(|&target| ProbabilityMilestone::solve(target, effective_odds, throughput))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(base_odds, luck, throughput, effective_odds, "evaluated catch odds");

    Ok(Some(CalculationResult {
        base_odds,
        luck,
        throughput,
        effective_odds,
        chance_per_attempt: model::chance_per_attempt(effective_odds),
        expected_attempts: model::expected_attempts(effective_odds),
        milestones,
    }))
}

/// Boundary checks, run before any math.
fn validate(input: &CalculationInput) -> Result<(OddsSpec, f64, f64), InvalidInput> {
    let luck = InvalidInput::check_positive(InputField::Luck, input.luck)?;
    let throughput = InvalidInput::check_positive(InputField::Throughput, input.throughput)?;
    for &target in &input.targets {
        // targets at or above 1 are legal and solve to unbounded
        if target.is_nan() || target <= 0.0 {
            return Err(InvalidInput::new(InputField::Target, target));
        }
    }
    let base = input.odds.resolve()?;
    Ok((base, luck, throughput))
}

/// Re-evaluates on every input change, keeping only the latest outcome.
///
/// An update with an input equal to the previous one returns the stored
/// outcome without recomputing; the result is identical either way.
#[derive(Debug, Default)]
pub struct Calculator {
    last: Option<(CalculationInput, Outcome)>,
    evaluations: u64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, input: CalculationInput) -> &Outcome {
        if self.last.as_ref().is_some_and(|(prev, _)| *prev != input) {
            self.last = None;
        }

        let evaluations = &mut self.evaluations;
        let (_, outcome) = self.last.get_or_insert_with(|| {
            *evaluations += 1;
            let outcome = evaluate(&input);
            (input, outcome)
        });
        outcome
    }

    /// Outcome of the most recent update.
    pub fn current(&self) -> Option<&Outcome> {
        self.last.as_ref().map(|(_, outcome)| outcome)
    }

    pub fn current_input(&self) -> Option<&CalculationInput> {
        self.last.as_ref().map(|(input, _)| input)
    }

    /// How many updates actually ran the pipeline.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestone::Attempts;
    use crate::odds::{parse, OddsSource};

    fn catalog_input(odds: &str) -> CalculationInput {
        CalculationInput::new(OddsSource::Catalog(parse(odds)))
    }

    #[test]
    fn test_evaluate_end_to_end() {
        let input = catalog_input("1 in 1,000").with_luck(2.0).with_throughput(300.0);
        let outcome = evaluate(&input);
        let result = outcome.result().expect("should be ready");

        assert_eq!(result.effective_odds, 500.0);
        assert!((result.chance_per_attempt - 0.002).abs() < 1e-12);
        assert_eq!(result.expected_attempts, 500.0);

        let attempts: Vec<_> = result.milestones.iter().map(|m| m.attempts).collect();
        assert_eq!(
            attempts,
            vec![
                Attempts::Finite(347),
                Attempts::Finite(1151),
                Attempts::Finite(2301)
            ]
        );
    }

    #[test]
    fn test_unknown_odds_is_no_estimate() {
        assert_eq!(evaluate(&catalog_input("???")), Outcome::NoEstimate);
        assert!(matches!(
            try_evaluate(&catalog_input("???")),
            Err(CalcError::UnknownOdds)
        ));
    }

    #[test]
    fn test_zero_luck_rejected() {
        let outcome = evaluate(&catalog_input("1 in 1000").with_luck(0.0));
        assert_eq!(
            outcome,
            Outcome::Rejected(InvalidInput::new(InputField::Luck, 0.0))
        );
    }

    #[test]
    fn test_zero_luck_rejected_before_unknown_odds() {
        let outcome = evaluate(&catalog_input("???").with_luck(0.0));
        assert!(matches!(outcome, Outcome::Rejected(_)));
    }

    #[test]
    fn test_overflowing_effective_odds_rejected() {
        let input = CalculationInput::new(OddsSource::Manual(1e300)).with_luck(1e-10);
        match evaluate(&input) {
            Outcome::Rejected(err) => {
                assert_eq!(err.field, InputField::EffectiveOdds);
                assert!(err.value.is_infinite());
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(matches!(
            try_evaluate(&input),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_ready_results_keep_chance_in_range() {
        for odds in [1.0, 7.5, 1e9, 1e17] {
            let outcome = evaluate(&CalculationInput::new(OddsSource::Manual(odds)));
            let result = outcome.result().unwrap();
            assert!(result.chance_per_attempt > 0.0 && result.chance_per_attempt <= 1.0);
            assert!(result.milestones.iter().all(|m| !m.attempts.is_unbounded()));
        }
    }

    #[test]
    fn test_bad_throughput_rejected() {
        let outcome = evaluate(&catalog_input("1 in 10").with_throughput(-300.0));
        assert!(matches!(
            outcome,
            Outcome::Rejected(InvalidInput {
                field: InputField::Throughput,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_manual_odds_rejected() {
        let input = CalculationInput::new(OddsSource::Manual(0.0));
        assert!(matches!(evaluate(&input), Outcome::Rejected(_)));
    }

    #[test]
    fn test_non_positive_target_rejected() {
        let input = catalog_input("1 in 10").with_targets(vec![0.5, 0.0]);
        assert!(matches!(
            evaluate(&input),
            Outcome::Rejected(InvalidInput {
                field: InputField::Target,
                ..
            })
        ));
    }

    #[test]
    fn test_target_of_one_is_unbounded_milestone() {
        let input = catalog_input("1 in 10").with_targets(vec![1.0]);
        let outcome = evaluate(&input);
        let milestone = outcome.result().unwrap().milestones[0];
        assert_eq!(milestone.attempts, Attempts::Unbounded);
        assert_eq!(milestone.hours, None);
    }

    #[test]
    fn test_calculator_memoizes_equal_inputs() {
        let mut calc = Calculator::new();
        let input = catalog_input("1 in 50");

        let first = calc.update(input.clone()).clone();
        let second = calc.update(input.clone()).clone();
        assert_eq!(first, second);
        assert_eq!(first, evaluate(&input));
        assert_eq!(calc.evaluations(), 1);
    }

    #[test]
    fn test_calculator_recomputes_on_change() {
        let mut calc = Calculator::new();
        calc.update(catalog_input("1 in 50"));
        let outcome = calc.update(catalog_input("1 in 50").with_luck(5.0)).clone();

        assert_eq!(calc.evaluations(), 2);
        assert_eq!(outcome.result().unwrap().effective_odds, 10.0);
        assert_eq!(calc.current(), Some(&outcome));
        assert_eq!(calc.current_input().unwrap().luck, 5.0);
    }
}

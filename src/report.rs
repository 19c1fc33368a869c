//! Text and JSON rendering of an evaluation.

use chrono::Utc;
use serde::Serialize;

use crate::calculator::{CalculationResult, Outcome};
use crate::catalog::FishRecord;
use crate::duration::{format_count, DurationPolicy};

/// An outcome plus what it was computed for, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fish: Option<FishRecord>,
    /// Odds text as entered or listed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds_text: Option<String>,
    pub outcome: Outcome,
    #[serde(skip)]
    pub policy: DurationPolicy,
}

impl Report {
    pub fn new(outcome: Outcome, policy: DurationPolicy) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            fish: None,
            odds_text: None,
            outcome,
            policy,
        }
    }

    pub fn with_fish(mut self, fish: FishRecord) -> Self {
        self.odds_text = Some(fish.odds.clone());
        self.fish = Some(fish);
        self
    }

    pub fn with_odds_text(mut self, text: impl Into<String>) -> Self {
        self.odds_text = Some(text.into());
        self
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      RNG CALCULATOR\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        if let Some(fish) = &self.fish {
            report.push_str(&format!("  Fish:          {}\n", fish.name));
            report.push_str(&format!("  Rarity:        {}\n", fish.rarity.as_str()));
            report.push_str(&format!("  Location:      {}\n", fish.location));
            report.push_str(&format!("  Value:         {}\n", fish.value));
        }
        if let Some(odds) = &self.odds_text {
            report.push_str(&format!("  Listed Odds:   {}\n", odds));
        }
        if self.fish.is_some() || self.odds_text.is_some() {
            report.push('\n');
        }

        match &self.outcome {
            Outcome::Ready(result) => self.push_result(&mut report, result),
            Outcome::NoEstimate => {
                report.push_str("  No estimate available: the odds for this fish are unknown.\n");
            }
            Outcome::Rejected(err) => {
                report.push_str(&format!("  Invalid input: {}\n", err));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    fn push_result(&self, report: &mut String, result: &CalculationResult) {
        report.push_str("── ODDS ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Base Odds:       1 in {}\n",
            format_odds(result.base_odds)
        ));
        report.push_str(&format!("  Luck Multiplier: x{}\n", result.luck));
        report.push_str(&format!(
            "  Effective Odds:  1 in {}\n",
            format_odds(result.effective_odds)
        ));
        report.push_str(&format!(
            "  Chance per Cast: {}\n",
            format_percent(result.chance_per_attempt)
        ));
        report.push_str(&format!(
            "  Expected Casts:  {} ({})\n\n",
            format_odds(result.expected_attempts),
            self.policy.format_hours(result.expected_hours())
        ));

        report.push_str(&format!(
            "── MILESTONES ({} casts/h) ──────────────────────────────────────\n",
            result.throughput
        ));
        report.push_str("  Chance     Casts            Time\n");
        report.push_str("  ──────     ─────            ────\n");
        for milestone in &result.milestones {
            report.push_str(&format!(
                "  {:>6}     {:<16} {}\n",
                format_percent(milestone.target),
                format_count(milestone.attempts, &self.policy.unbounded_label),
                self.policy.format_optional(milestone.hours)
            ));
        }
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// File name used when saving the JSON report.
    pub fn file_name() -> String {
        format!("odds_report_{}.json", Utc::now().format("%Y%m%d_%H%M%S"))
    }
}

/// Odds denominators: whole numbers grouped, fractions to two places.
fn format_odds(n: f64) -> String {
    if n.fract() == 0.0 && n < u64::MAX as f64 {
        crate::duration::group_thousands(n as u64)
    } else {
        format!("{:.2}", n)
    }
}

/// Probabilities as a percentage with enough digits to stay non-zero.
fn format_percent(p: f64) -> String {
    let pct = p * 100.0;
    if pct >= 1.0 || pct == 0.0 {
        format!("{}%", trim_zeros(format!("{:.2}", pct)))
    } else {
        // leading zeros + 2 significant digits
        let decimals = (-pct.log10()).floor() as usize + 2;
        format!("{}%", trim_zeros(format!("{:.*}", decimals, pct)))
    }
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{evaluate, CalculationInput};
    use crate::error::{InputField, InvalidInput};
    use crate::odds::{OddsSource, OddsSpec};

    fn ready_report() -> Report {
        let input = CalculationInput::new(OddsSource::Catalog(OddsSpec::Denominator(1000.0)))
            .with_luck(2.0);
        Report::new(evaluate(&input), DurationPolicy::default()).with_odds_text("1 in 1,000")
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.99), "99%");
        assert_eq!(format_percent(0.002), "0.2%");
        assert_eq!(format_percent(0.000_001), "0.0001%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_odds() {
        assert_eq!(format_odds(500.0), "500");
        assert_eq!(format_odds(10_000_000.0), "10,000,000");
        assert_eq!(format_odds(333.333_333), "333.33");
    }

    #[test]
    fn test_text_report_lists_milestones() {
        let text = ready_report().to_text();
        assert!(text.contains("1 in 500"));
        assert!(text.contains("0.2%"));
        assert!(text.contains("347"));
        assert!(text.contains("1,151"));
        assert!(text.contains("2,301"));
        assert!(text.contains("1.2 h"));
        assert!(text.contains("3.8 h"));
        assert!(text.contains("7.7 h"));
    }

    #[test]
    fn test_text_report_no_estimate() {
        let text = Report::new(Outcome::NoEstimate, DurationPolicy::default()).to_text();
        assert!(text.contains("No estimate available"));
    }

    #[test]
    fn test_text_report_rejected() {
        let outcome = Outcome::Rejected(InvalidInput::new(InputField::Luck, 0.0));
        let text = Report::new(outcome, DurationPolicy::default()).to_text();
        assert!(text.contains("Invalid input: luck multiplier"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&ready_report().to_json()).unwrap();
        assert_eq!(json["outcome"]["status"], "ready");
        assert_eq!(json["outcome"]["detail"]["effective_odds"], 500.0);
        assert_eq!(
            json["outcome"]["detail"]["milestones"][0]["attempts"]["finite"],
            347
        );
        assert_eq!(json["odds_text"], "1 in 1,000");
    }

    #[test]
    fn test_json_unbounded_is_explicit() {
        let input = CalculationInput::new(OddsSource::Manual(10.0)).with_targets(vec![1.0]);
        let report = Report::new(evaluate(&input), DurationPolicy::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        let milestone = &json["outcome"]["detail"]["milestones"][0];
        assert_eq!(milestone["attempts"], "unbounded");
        assert!(milestone["hours"].is_null());
    }
}

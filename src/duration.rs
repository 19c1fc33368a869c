//! Human-readable durations for milestone times.

use serde::{Deserialize, Serialize};

use crate::milestone::Attempts;

/// Most decimals the hour format supports.
pub const MAX_HOUR_DECIMALS: usize = 6;

/// Thresholds and labels used when rendering hours.
///
/// Below `minutes_below_hours` a duration renders as whole minutes, below
/// `days_from_hours` as hours with `hour_decimals` decimals, and otherwise as
/// whole days plus rounded remainder hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationPolicy {
    pub minutes_below_hours: f64,
    pub days_from_hours: f64,
    pub hour_decimals: usize,
    pub unbounded_label: String,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self {
            minutes_below_hours: 1.0,
            days_from_hours: 24.0,
            hour_decimals: 1,
            unbounded_label: "unbounded".to_string(),
        }
    }
}

impl DurationPolicy {
    /// Renders a finite number of hours.
    pub fn format_hours(&self, hours: f64) -> String {
        if !hours.is_finite() {
            return self.unbounded_label.clone();
        }
        let hours = hours.max(0.0);

        if hours < self.minutes_below_hours {
            let minutes = (hours * 60.0).round();
            // 59.6 minutes rounds up into the hour format
            if minutes < self.minutes_below_hours * 60.0 {
                return format!("{} min", minutes as u64);
            }
        }

        let decimals = self.hour_decimals.min(MAX_HOUR_DECIMALS);
        let scale = 10f64.powi(decimals as i32);
        let rounded = (hours * scale).round() / scale;
        if rounded < self.days_from_hours {
            return format!("{:.*} h", decimals, rounded);
        }

        format_days(hours)
    }

    /// Renders `hours`, or the unbounded label when there are none.
    pub fn format_optional(&self, hours: Option<f64>) -> String {
        match hours {
            Some(h) => self.format_hours(h),
            None => self.unbounded_label.clone(),
        }
    }

    /// Renders the time `attempts` take at `throughput` casts per hour.
    pub fn format_attempts(&self, attempts: Attempts, throughput: f64) -> String {
        self.format_optional(attempts.finite().map(|n| n as f64 / throughput))
    }
}

/// Whole days plus rounded remainder hours, carrying 24h into a day.
fn format_days(hours: f64) -> String {
    let mut days = (hours / 24.0).floor() as u64;
    let mut rest = (hours - days as f64 * 24.0).round() as u64;
    if rest >= 24 {
        days += 1;
        rest -= 24;
    }
    format!("{}d {}h", days, rest)
}

/// Formats a cast count with thousands separators.
pub fn format_count(attempts: Attempts, unbounded_label: &str) -> String {
    match attempts {
        Attempts::Finite(n) => group_thousands(n),
        Attempts::Unbounded => unbounded_label.to_string(),
    }
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//! Fixed-interest engine

use super::{FixedDailyRecord, FixedInput, FixedResult};
use crate::error::InputError;
use log::info;
use serde::Serialize;

/// Headline figures computed without building the daily schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPreview {
    pub daily_interest: f64,
    pub total_interest: f64,
    pub total_payout: f64,
}

/// Fixed daily-interest engine for a validated set of parameters.
///
/// Interest is a constant share of the principal paid every day; nothing is
/// reinvested, so the schedule is fully deterministic.
#[derive(Debug, Clone)]
pub struct FixedEngine {
    input: FixedInput,
}

impl FixedEngine {
    /// Validate `input` and build an engine for it
    pub fn new(input: FixedInput) -> Result<Self, InputError> {
        input.validate()?;
        Ok(Self { input })
    }

    pub fn input(&self) -> &FixedInput {
        &self.input
    }

    /// Daily interest, total interest and payout for the current parameters
    pub fn preview(&self) -> FixedPreview {
        let daily_interest = self.daily_interest();
        let total_interest = daily_interest * self.input.days as f64;
        FixedPreview {
            daily_interest,
            total_interest,
            total_payout: self.input.principal + total_interest,
        }
    }

    /// Build the full day-by-day schedule
    pub fn simulate(&self) -> FixedResult {
        let principal = self.input.principal;
        let daily_interest = self.daily_interest();
        let preview = self.preview();

        let mut schedule = Vec::with_capacity(self.input.days as usize);
        let mut cumulative_interest = 0.0;
        for day in 1..=self.input.days {
            cumulative_interest += daily_interest;
            schedule.push(FixedDailyRecord {
                day,
                principal,
                daily_interest,
                cumulative_interest,
                current_value: principal + cumulative_interest,
            });
        }

        info!(
            "Fixed schedule over {} day(s): total interest {:.2}, payout {:.2}",
            self.input.days, preview.total_interest, preview.total_payout
        );

        FixedResult {
            schedule,
            principal,
            daily_rate_percent: self.input.daily_rate_percent,
            daily_interest,
            days: self.input.days,
            total_interest: preview.total_interest,
            total_payout: preview.total_payout,
        }
    }

    fn daily_interest(&self) -> f64 {
        self.input.principal * (self.input.daily_rate_percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn engine(principal: f64, daily_rate_percent: f64, days: u32) -> FixedEngine {
        FixedEngine::new(FixedInput { principal, daily_rate_percent, days }).expect("valid input")
    }

    #[test]
    fn test_three_day_scenario() {
        let result = engine(1000.0, 2.0, 3).simulate();

        assert_eq!(result.daily_interest, 20.0);
        let rows: Vec<_> = result
            .schedule
            .iter()
            .map(|r| (r.day, r.principal, r.daily_interest, r.cumulative_interest, r.current_value))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, 1000.0, 20.0, 20.0, 1020.0),
                (2, 1000.0, 20.0, 40.0, 1040.0),
                (3, 1000.0, 20.0, 60.0, 1060.0),
            ]
        );
        assert_eq!(result.total_interest, 60.0);
        assert_eq!(result.total_payout, 1060.0);
        assert_eq!(result.days, 3);
        assert_eq!(result.daily_rate_percent, 2.0);
    }

    #[test]
    fn test_cumulative_matches_multiple() {
        let result = engine(1234.57, 0.37, 365).simulate();

        for record in &result.schedule {
            assert_abs_diff_eq!(
                record.cumulative_interest,
                result.daily_interest * record.day as f64,
                epsilon = 1e-9
            );
            assert_eq!(record.principal, 1234.57);
        }
        assert_abs_diff_eq!(result.total_interest, result.daily_interest * 365.0, epsilon = 1e-9);

        let last = result.schedule.last().expect("schedule");
        assert_abs_diff_eq!(last.current_value, result.total_payout, epsilon = 1e-9);
    }

    #[test]
    fn test_amounts_are_not_rounded() {
        // 333.33 * 1.5% = 4.99995, kept as is
        let result = engine(333.33, 1.5, 2).simulate();
        assert_relative_eq!(result.daily_interest, 4.99995, max_relative = 1e-12);
        assert_relative_eq!(result.schedule[1].cumulative_interest, 9.9999, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_days() {
        let result = engine(500.0, 3.0, 0).simulate();
        assert!(result.schedule.is_empty());
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_payout, 500.0);
    }

    #[test]
    fn test_figures_stay_finite_at_input_limits() {
        use crate::fixed::{MAX_DAILY_RATE_PERCENT, MAX_DAYS, MAX_PRINCIPAL};

        let result = engine(MAX_PRINCIPAL, MAX_DAILY_RATE_PERCENT, MAX_DAYS).simulate();
        assert_eq!(result.schedule.len(), MAX_DAYS as usize);
        assert!(result.daily_interest.is_finite());
        assert!(result.total_interest.is_finite());
        assert!(result.total_payout.is_finite());
        let last = result.schedule.last().expect("schedule");
        assert!(last.current_value.is_finite());
    }

    #[test]
    fn test_preview_matches_simulation() {
        let engine = engine(2500.0, 1.25, 40);
        let preview = engine.preview();
        let result = engine.simulate();

        assert_eq!(preview.daily_interest, result.daily_interest);
        assert_eq!(preview.total_interest, result.total_interest);
        assert_eq!(preview.total_payout, result.total_payout);
    }

    #[test]
    fn test_summary() {
        let summary = engine(1000.0, 2.0, 3).simulate().summary();
        assert_eq!(summary.total_payout, 1060.0);
        assert_relative_eq!(summary.return_percent.unwrap_or_default(), 6.0);

        let zero = engine(0.0, 2.0, 3).simulate().summary();
        assert_eq!(zero.total_interest, 0.0);
        assert_eq!(zero.return_percent, None);
    }

    #[test]
    fn test_new_rejects_negative_principal() {
        let err = FixedEngine::new(FixedInput { principal: -1.0, ..Default::default() }).unwrap_err();
        assert!(matches!(err, InputError::Negative { field: "principal", .. }));
    }
}

//! Compound model parameters

use crate::error::{require_at_most, require_in_range, require_non_negative, InputError};
use serde::{Deserialize, Serialize};

/// Largest accepted deposit per device
pub const MAX_DEPOSIT: f64 = 1e12;

/// Largest share of the balance that can be traded either way, in percent.
///
/// Within this bound a balance never turns negative and positive trades stay
/// under the trade cap, so every figure stays finite.
pub const MAX_TRADE_PERCENT: f64 = 100.0;

/// Longest accepted simulation
pub const MAX_DAYS: u32 = 36_500;

/// Largest accepted `device_count * days`, the number of daily records produced
pub const MAX_DEVICE_DAYS: u64 = 10_000_000;

/// Parameters for a compound simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInput {
    /// Number of independent devices to simulate
    #[serde(default = "default_device_count", alias = "numDevices")]
    pub device_count: u32,

    /// Starting balance of every device
    #[serde(default = "default_deposit", alias = "initialDeposit")]
    pub initial_deposit_per_device: f64,

    /// Lowest share of the balance traded on a day, in percent (5.0 = 5%)
    #[serde(default = "default_worst_case", alias = "worstCase")]
    pub worst_case_percent: f64,

    /// Highest share of the balance traded on a day, in percent
    #[serde(default = "default_best_case", alias = "bestCase")]
    pub best_case_percent: f64,

    /// Number of trading days to simulate
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_device_count() -> u32 { 1 }
fn default_deposit() -> f64 { 1000.0 }
fn default_worst_case() -> f64 { 1.0 }
fn default_best_case() -> f64 { 5.0 }
fn default_days() -> u32 { 30 }

impl Default for CompoundInput {
    fn default() -> Self {
        Self {
            device_count: default_device_count(),
            initial_deposit_per_device: default_deposit(),
            worst_case_percent: default_worst_case(),
            best_case_percent: default_best_case(),
            days: default_days(),
        }
    }
}

impl CompoundInput {
    /// Check the parameters before they reach the engine.
    ///
    /// The deposit must be non-negative and at most [`MAX_DEPOSIT`], both
    /// percentages within +/-[`MAX_TRADE_PERCENT`] and ordered, and the run
    /// no longer than [`MAX_DAYS`] nor [`MAX_DEVICE_DAYS`] records in total.
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("initial deposit", self.initial_deposit_per_device)?;
        require_in_range("initial deposit", self.initial_deposit_per_device, 0.0, MAX_DEPOSIT)?;
        require_in_range(
            "worst case percent",
            self.worst_case_percent,
            -MAX_TRADE_PERCENT,
            MAX_TRADE_PERCENT,
        )?;
        require_in_range(
            "best case percent",
            self.best_case_percent,
            -MAX_TRADE_PERCENT,
            MAX_TRADE_PERCENT,
        )?;
        if self.best_case_percent < self.worst_case_percent {
            return Err(InputError::InvertedRange {
                worst: self.worst_case_percent,
                best: self.best_case_percent,
            });
        }
        require_at_most("days", u64::from(self.days), u64::from(MAX_DAYS))?;
        require_at_most(
            "device days",
            u64::from(self.device_count) * u64::from(self.days),
            MAX_DEVICE_DAYS,
        )?;
        Ok(())
    }

    /// Total capital deposited across all devices
    pub fn total_investment(&self) -> f64 {
        self.initial_deposit_per_device * self.device_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CompoundInput::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let input = CompoundInput {
            worst_case_percent: 6.0,
            best_case_percent: 4.0,
            ..Default::default()
        };
        assert_eq!(
            input.validate(),
            Err(InputError::InvertedRange { worst: 6.0, best: 4.0 })
        );
    }

    #[test]
    fn test_equal_range_accepted() {
        let input = CompoundInput {
            worst_case_percent: 5.0,
            best_case_percent: 5.0,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_bad_deposit_rejected() {
        let negative = CompoundInput {
            initial_deposit_per_device: -100.0,
            ..Default::default()
        };
        assert!(matches!(negative.validate(), Err(InputError::Negative { .. })));

        let nan = CompoundInput {
            initial_deposit_per_device: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(nan.validate(), Err(InputError::NotFinite { .. })));
    }

    #[test]
    fn test_non_finite_percent_rejected() {
        let input = CompoundInput {
            best_case_percent: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            input.validate(),
            Err(InputError::NotFinite { field: "best case percent" })
        );
    }

    #[test]
    fn test_extreme_values_rejected() {
        let huge_percent = CompoundInput {
            worst_case_percent: -1e308,
            best_case_percent: -1e308,
            ..Default::default()
        };
        assert_eq!(
            huge_percent.validate(),
            Err(InputError::OutOfRange {
                field: "worst case percent",
                value: -1e308,
                min: -100.0,
                max: 100.0,
            })
        );

        let huge_deposit = CompoundInput {
            initial_deposit_per_device: 1.7e308,
            ..Default::default()
        };
        assert!(matches!(
            huge_deposit.validate(),
            Err(InputError::OutOfRange { field: "initial deposit", .. })
        ));

        let whole_balance = CompoundInput {
            initial_deposit_per_device: MAX_DEPOSIT,
            worst_case_percent: -100.0,
            best_case_percent: 100.0,
            ..Default::default()
        };
        assert!(whole_balance.validate().is_ok());
    }

    #[test]
    fn test_run_length_limits() {
        let too_long = CompoundInput { days: u32::MAX, ..Default::default() };
        assert_eq!(
            too_long.validate(),
            Err(InputError::TooLarge {
                field: "days",
                value: u64::from(u32::MAX),
                limit: u64::from(MAX_DAYS),
            })
        );

        let too_many_records = CompoundInput {
            device_count: 1_000,
            days: 36_500,
            ..Default::default()
        };
        assert_eq!(
            too_many_records.validate(),
            Err(InputError::TooLarge { field: "device days", value: 36_500_000, limit: MAX_DEVICE_DAYS })
        );

        let at_limit = CompoundInput { device_count: 1_000, days: 10_000, ..Default::default() };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_deserialize_form_field_names() {
        let json = r#"{"numDevices": 3, "initialDeposit": 250.5, "worstCase": 2, "bestCase": 4}"#;
        let input: CompoundInput = serde_json::from_str(json).expect("parse");
        assert_eq!(input.device_count, 3);
        assert_eq!(input.initial_deposit_per_device, 250.5);
        assert_eq!(input.worst_case_percent, 2.0);
        assert_eq!(input.best_case_percent, 4.0);
        // Missing field falls back to its default
        assert_eq!(input.days, 30);
    }

    #[test]
    fn test_total_investment() {
        let input = CompoundInput {
            device_count: 4,
            initial_deposit_per_device: 1250.0,
            ..Default::default()
        };
        assert_eq!(input.total_investment(), 5000.0);
    }
}

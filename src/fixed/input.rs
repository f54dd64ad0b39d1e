//! Fixed model parameters

use crate::error::{require_at_most, require_in_range, require_non_negative, InputError};
use serde::{Deserialize, Serialize};

/// Largest accepted principal
pub const MAX_PRINCIPAL: f64 = 1e12;

/// Largest accepted daily rate magnitude, in percent
pub const MAX_DAILY_RATE_PERCENT: f64 = 10_000.0;

/// Longest accepted schedule
pub const MAX_DAYS: u32 = 36_500;

/// Parameters for a fixed-interest schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedInput {
    /// Invested amount, never reinvested or reduced
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Interest paid per day as a percentage of principal (3.5 = 3.5%)
    #[serde(default = "default_daily_rate", alias = "dailyRate")]
    pub daily_rate_percent: f64,

    /// Number of days interest is paid
    #[serde(default = "default_days", alias = "fixedDays")]
    pub days: u32,
}

fn default_principal() -> f64 { 1000.0 }
fn default_daily_rate() -> f64 { 1.0 }
fn default_days() -> u32 { 30 }

impl Default for FixedInput {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            daily_rate_percent: default_daily_rate(),
            days: default_days(),
        }
    }
}

impl FixedInput {
    /// Bounds keep every schedule figure finite: at the limits the payout is
    /// still far below `f64::MAX`.
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("principal", self.principal)?;
        require_in_range("principal", self.principal, 0.0, MAX_PRINCIPAL)?;
        require_in_range(
            "daily rate percent",
            self.daily_rate_percent,
            -MAX_DAILY_RATE_PERCENT,
            MAX_DAILY_RATE_PERCENT,
        )?;
        require_at_most("days", u64::from(self.days), u64::from(MAX_DAYS))?;
        Ok(())
    }
}

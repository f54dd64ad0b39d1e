//! Fixed-interest output structures
//!
//! Amounts are kept at full precision; rounding to cents is left to the
//! reports so that cumulative sums stay exact.

use serde::{Deserialize, Serialize};

/// One day of the fixed-interest schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDailyRecord {
    /// 1-based day index
    pub day: u32,
    pub principal: f64,
    pub daily_interest: f64,
    pub cumulative_interest: f64,
    pub current_value: f64,
}

/// Result of a fixed-interest calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedResult {
    pub schedule: Vec<FixedDailyRecord>,
    pub principal: f64,
    pub daily_rate_percent: f64,
    pub daily_interest: f64,
    pub days: u32,
    pub total_interest: f64,
    pub total_payout: f64,
}

impl FixedResult {
    /// Headline figures for display
    pub fn summary(&self) -> FixedSummary {
        let return_percent = if self.principal > 0.0 {
            Some(self.total_interest / self.principal * 100.0)
        } else {
            None
        };

        FixedSummary {
            principal: self.principal,
            daily_interest: self.daily_interest,
            total_interest: self.total_interest,
            total_payout: self.total_payout,
            return_percent,
        }
    }
}

/// Headline figures of a fixed-interest calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedSummary {
    pub principal: f64,
    pub daily_interest: f64,
    pub total_interest: f64,
    pub total_payout: f64,
    /// Total interest as a percentage of principal, `None` for a zero principal
    pub return_percent: Option<f64>,
}

//! Compound simulation output structures

use crate::error::ExportError;
use crate::rounding::round2;
use log::warn;
use serde::{Deserialize, Serialize};

/// Profit at or above this amount marks a day as a high-profit day
pub const HIGH_PROFIT_THRESHOLD: f64 = 5.0;

/// One device's figures for a single day. All amounts are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundDailyRecord {
    /// 1-based day index
    pub day: u32,
    pub start_balance: f64,
    pub traded_amount: f64,
    pub profit: f64,
    pub cumulative_profit: f64,
    pub end_balance: f64,
}

impl CompoundDailyRecord {
    pub fn is_high_profit(&self) -> bool {
        self.profit >= HIGH_PROFIT_THRESHOLD
    }
}

/// Day-by-day records of one device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSchedule {
    pub label: String,
    pub records: Vec<CompoundDailyRecord>,
}

impl DeviceSchedule {
    /// Cumulative profit after the last day, 0 when no day was simulated
    pub fn final_cumulative_profit(&self) -> f64 {
        self.records.last().map(|r| r.cumulative_profit).unwrap_or(0.0)
    }
}

/// Result of a compound simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundResult {
    /// Schedules in device order
    pub per_device: Vec<DeviceSchedule>,
    /// Sum of every device's final cumulative profit, rounded to cents
    pub total_profit: f64,
    /// Last end balance of each device, in device order
    pub final_balances: Vec<f64>,
}

impl CompoundResult {
    /// Assemble a result from finished device runs, deriving the totals.
    pub(crate) fn from_devices(devices: Vec<(DeviceSchedule, f64)>) -> Self {
        let mut per_device = Vec::with_capacity(devices.len());
        let mut final_balances = Vec::with_capacity(devices.len());
        for (schedule, final_balance) in devices {
            final_balances.push(round2(final_balance));
            per_device.push(schedule);
        }

        let total_profit = round2(
            per_device
                .iter()
                .map(DeviceSchedule::final_cumulative_profit)
                .sum::<f64>(),
        );

        Self { per_device, total_profit, final_balances }
    }

    /// Look up a device schedule by its label
    pub fn device(&self, label: &str) -> Option<&DeviceSchedule> {
        self.per_device.iter().find(|d| d.label == label)
    }

    /// Look up a device schedule, failing with [`ExportError::UnknownDevice`]
    pub fn require_device(&self, label: &str) -> Result<&DeviceSchedule, ExportError> {
        self.device(label)
            .ok_or_else(|| ExportError::UnknownDevice(label.to_string()))
    }

    /// Sum of all devices' final balances
    pub fn combined_final_balance(&self) -> f64 {
        self.final_balances.iter().sum()
    }

    /// Headline figures for display, given the per-device deposit used
    pub fn summary(&self, initial_deposit_per_device: f64) -> CompoundSummary {
        let device_count = self.final_balances.len();
        let total_investment = initial_deposit_per_device * device_count as f64;
        let combined_final_balance = self.combined_final_balance();

        let roi_percent = if total_investment > 0.0 {
            Some((combined_final_balance - total_investment) / total_investment * 100.0)
        } else {
            warn!("Return on investment undefined: total investment is zero");
            None
        };

        CompoundSummary {
            device_count,
            total_investment,
            total_profit: self.total_profit,
            combined_final_balance,
            roi_percent,
        }
    }
}

/// Headline figures of a compound simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundSummary {
    pub device_count: usize,
    pub total_investment: f64,
    pub total_profit: f64,
    pub combined_final_balance: f64,
    /// `None` when nothing was invested
    pub roi_percent: Option<f64>,
}

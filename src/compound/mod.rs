//! Compounding daily-trade model across independent devices

mod engine;
mod input;
mod result;

pub use engine::{CompoundEngine, DayOutcome};
pub use input::{CompoundInput, MAX_DAYS, MAX_DEPOSIT, MAX_DEVICE_DAYS, MAX_TRADE_PERCENT};
pub use result::{CompoundDailyRecord, CompoundResult, CompoundSummary, DeviceSchedule, HIGH_PROFIT_THRESHOLD};

// ============================================================================
// Trading Constants
// ============================================================================
// Profit is earned only on the capital actually traded each day, and the
// traded capital is capped no matter how large a device's balance grows.

/// Profit earned on traded capital per day (1.8%)
pub const DAILY_PROFIT_RATE: f64 = 0.018;

/// Maximum capital tradable by one device in a single day
pub const TRADE_CAP: f64 = 10_000.0;

/// Label of the 1-based `index`-th device ("Device 1", "Device 2", ...)
pub fn device_label(index: u32) -> String {
    format!("Device {}", index)
}

//! Projected-return engines for two investment models
//!
//! - [`compound`]: N independent devices trading a random share of their
//!   balance each day, compounding a fixed profit rate on the traded capital
//! - [`fixed`]: a fixed daily interest on a constant principal, no reinvestment
//!
//! Both engines are stateless: an input struct goes in, a result struct comes
//! out. The [`report`] module renders results as CSV and plain-text reports.

pub mod compound;
pub mod error;
pub mod fixed;
pub mod report;
pub mod rounding;

pub use compound::{
    CompoundDailyRecord, CompoundEngine, CompoundInput, CompoundResult, CompoundSummary,
    DeviceSchedule, DAILY_PROFIT_RATE, TRADE_CAP,
};
pub use error::{ExportError, InputError};
pub use fixed::{FixedDailyRecord, FixedEngine, FixedInput, FixedPreview, FixedResult, FixedSummary};
pub use rounding::round2;

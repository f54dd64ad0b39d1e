//! Fixed daily-interest model on a constant principal

mod engine;
mod input;
mod result;

pub use engine::{FixedEngine, FixedPreview};
pub use input::{FixedInput, MAX_DAILY_RATE_PERCENT, MAX_DAYS, MAX_PRINCIPAL};
pub use result::{FixedDailyRecord, FixedResult, FixedSummary};

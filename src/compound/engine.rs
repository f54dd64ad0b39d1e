//! Compound simulation engine
//!
//! Each device starts from the same deposit and, every day, trades a random
//! share of its balance drawn uniformly from the worst/best case range. The
//! traded capital earns [`DAILY_PROFIT_RATE`], capped at [`TRADE_CAP`], and the
//! profit is compounded into the balance for the next day.

use super::{device_label, CompoundInput, CompoundResult, CompoundDailyRecord, DeviceSchedule};
use super::{DAILY_PROFIT_RATE, TRADE_CAP};
use crate::error::InputError;
use crate::rounding::round2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Rounded outcome of trading a balance for one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayOutcome {
    pub new_balance: f64,
    pub profit: f64,
}

/// Compound simulation engine for a validated set of parameters.
///
/// Holds no state between runs; every `simulate*` call starts from the
/// initial deposit.
#[derive(Debug, Clone)]
pub struct CompoundEngine {
    input: CompoundInput,
}

impl CompoundEngine {
    /// Validate `input` and build an engine for it
    pub fn new(input: CompoundInput) -> Result<Self, InputError> {
        input.validate()?;
        Ok(Self { input })
    }

    pub fn input(&self) -> &CompoundInput {
        &self.input
    }

    /// Run all devices sequentially, drawing from a single random source.
    ///
    /// Draws are consumed one per device per day: all days of device 1, then
    /// all days of device 2, and so on.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> CompoundResult {
        let devices = (1..=self.input.device_count)
            .map(|index| self.run_device(index, &mut *rng))
            .collect();

        self.finish(devices)
    }

    /// Run all devices sequentially from a seeded ChaCha8 generator
    pub fn simulate_seeded(&self, seed: u64) -> CompoundResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.simulate(&mut rng)
    }

    /// Run devices in parallel, each on its own random stream.
    ///
    /// Device `n` draws from stream `n` of a ChaCha8 generator seeded with
    /// `seed`, so the output depends only on the seed and not on thread
    /// scheduling. The figures differ from [`simulate_seeded`](Self::simulate_seeded)
    /// for the same seed because the draws are split differently.
    pub fn simulate_parallel(&self, seed: u64) -> CompoundResult {
        let devices = (1..self.input.device_count.saturating_add(1))
            .into_par_iter()
            .map(|index| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(u64::from(index));
                self.run_device(index, &mut rng)
            })
            .collect();

        self.finish(devices)
    }

    /// Trade `balance` for one day at `trade_percent` percent.
    ///
    /// The new balance keeps the untraded part and adds back the traded part
    /// grown by the profit rate. Both figures are rounded to cents.
    pub fn simulate_day(balance: f64, trade_percent: f64) -> DayOutcome {
        let tradable = balance * (trade_percent / 100.0);
        let actual_trade = tradable.min(TRADE_CAP);
        let profit = actual_trade * DAILY_PROFIT_RATE;
        let new_balance = (balance - actual_trade) + actual_trade * (1.0 + DAILY_PROFIT_RATE);

        DayOutcome {
            new_balance: round2(new_balance),
            profit: round2(profit),
        }
    }

    /// Draw a trade percentage uniformly from `[worst, best]`, rounded to 2 decimals
    pub fn sample_trade_percent<R: Rng + ?Sized>(rng: &mut R, worst: f64, best: f64) -> f64 {
        let unit: f64 = rng.gen();
        round2(unit * (best - worst) + worst)
    }

    /// Simulate every day of one device, returning its schedule and final balance
    fn run_device<R: Rng + ?Sized>(&self, index: u32, rng: &mut R) -> (DeviceSchedule, f64) {
        let input = &self.input;
        let mut balance = input.initial_deposit_per_device;
        let mut cumulative_profit = 0.0;
        let mut records = Vec::with_capacity(input.days as usize);

        for day in 1..=input.days {
            let trade_percent = Self::sample_trade_percent(
                &mut *rng,
                input.worst_case_percent,
                input.best_case_percent,
            );
            let start_balance = balance;

            let outcome = Self::simulate_day(balance, trade_percent);
            cumulative_profit += outcome.profit;

            // Recorded traded amount is derived from the start balance on its
            // own rounding path, not taken from simulate_day
            let traded_amount = round2((start_balance * trade_percent / 100.0).min(TRADE_CAP));

            records.push(CompoundDailyRecord {
                day,
                start_balance: round2(start_balance),
                traded_amount,
                profit: outcome.profit,
                cumulative_profit: round2(cumulative_profit),
                end_balance: outcome.new_balance,
            });
            balance = outcome.new_balance;
        }

        let label = device_label(index);
        debug!("{}: final balance {:.2}, cumulative profit {:.2}", label, balance, cumulative_profit);

        (DeviceSchedule { label, records }, balance)
    }

    fn finish(&self, devices: Vec<(DeviceSchedule, f64)>) -> CompoundResult {
        let result = CompoundResult::from_devices(devices);
        info!(
            "Simulated {} device(s) over {} day(s): total profit {:.2}",
            self.input.device_count, self.input.days, result.total_profit
        );
        result
    }
}

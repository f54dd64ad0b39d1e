//! CSV export of daily schedules
//!
//! Columns mirror the on-screen tables with the `$` signs dropped.

use crate::compound::{CompoundDailyRecord, CompoundResult};
use crate::error::ExportError;
use crate::fixed::FixedResult;
use std::io::Write;

const COMPOUND_HEADER: [&str; 6] = [
    "Day",
    "Start Balance",
    "Traded Amount",
    "Profit",
    "Cumulative Profit",
    "End Balance",
];

const FIXED_HEADER: [&str; 5] = [
    "Day",
    "Principal",
    "Daily Interest",
    "Cumulative Interest",
    "Current Value",
];

fn cents(value: f64) -> String {
    format!("{:.2}", value)
}

fn compound_row(record: &CompoundDailyRecord) -> [String; 6] {
    [
        record.day.to_string(),
        cents(record.start_balance),
        cents(record.traded_amount),
        cents(record.profit),
        cents(record.cumulative_profit),
        cents(record.end_balance),
    ]
}

/// Write the schedule of the device labelled `label`
pub fn write_device_csv<W: Write>(
    result: &CompoundResult,
    label: &str,
    writer: W,
) -> Result<(), ExportError> {
    let device = result.require_device(label)?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COMPOUND_HEADER)?;
    for record in &device.records {
        csv.write_record(compound_row(record))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write every device's schedule, one block after another, with a leading Device column
pub fn write_all_devices_csv<W: Write>(result: &CompoundResult, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(std::iter::once("Device").chain(COMPOUND_HEADER))?;
    for device in &result.per_device {
        for record in &device.records {
            let row = compound_row(record);
            csv.write_record(std::iter::once(device.label.as_str()).chain(row.iter().map(String::as_str)))?;
        }
    }
    csv.flush()?;
    Ok(())
}

/// Write the fixed-interest schedule, rounding amounts to cents
pub fn write_fixed_csv<W: Write>(result: &FixedResult, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(FIXED_HEADER)?;
    for record in &result.schedule {
        csv.write_record([
            record.day.to_string(),
            cents(record.principal),
            cents(record.daily_interest),
            cents(record.cumulative_interest),
            cents(record.current_value),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

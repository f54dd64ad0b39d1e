//! Plain-text reports: parameters, summary, then detailed tables

use super::{format_money, format_percent};
use crate::compound::{CompoundInput, CompoundResult};
use crate::error::ExportError;
use crate::fixed::FixedResult;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::Write;

const LABEL_WIDTH: usize = 24;
const CELL_WIDTH: usize = 18;

fn write_title<W: Write, Tz: TimeZone>(
    out: &mut W,
    title: &str,
    generated_at: &DateTime<Tz>,
) -> Result<(), ExportError>
where
    Tz::Offset: Display,
{
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out, "Generated on: {}", generated_at.format("%Y-%m-%d at %H:%M:%S"))?;
    Ok(())
}

fn write_section<W: Write>(out: &mut W, heading: &str) -> Result<(), ExportError> {
    writeln!(out)?;
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "-".repeat(heading.len()))?;
    Ok(())
}

fn write_pairs<W: Write>(out: &mut W, pairs: &[(&str, String)]) -> Result<(), ExportError> {
    for (label, value) in pairs {
        writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH)?;
    }
    Ok(())
}

fn write_table_row<W: Write>(out: &mut W, cells: &[String]) -> Result<(), ExportError> {
    let (first, rest) = match cells.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };
    write!(out, "{:>5}", first)?;
    for cell in rest {
        write!(out, "{:>width$}", cell, width = CELL_WIDTH)?;
    }
    writeln!(out)?;
    Ok(())
}

fn header(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Write the compound report for a finished simulation
pub fn write_compound_report<W: Write, Tz: TimeZone>(
    input: &CompoundInput,
    result: &CompoundResult,
    generated_at: &DateTime<Tz>,
    mut out: W,
) -> Result<(), ExportError>
where
    Tz::Offset: Display,
{
    let summary = result.summary(input.initial_deposit_per_device);

    write_title(&mut out, "Trading Profit Calculator Report", generated_at)?;

    write_section(&mut out, "Input Parameters")?;
    write_pairs(
        &mut out,
        &[
            ("Number of Devices", input.device_count.to_string()),
            ("Initial Deposit", format_money(input.initial_deposit_per_device)),
            ("Worst Case %", format!("{}%", input.worst_case_percent)),
            ("Best Case %", format!("{}%", input.best_case_percent)),
            ("Days", input.days.to_string()),
        ],
    )?;

    write_section(&mut out, "Summary of Results")?;
    write_pairs(
        &mut out,
        &[
            ("Total Investment", format_money(summary.total_investment)),
            ("Total Profit", format_money(summary.total_profit)),
            ("Final Balance", format_money(summary.combined_final_balance)),
            ("Return on Investment", format_percent(summary.roi_percent)),
        ],
    )?;

    for device in &result.per_device {
        write_section(&mut out, &format!("{} - Detailed Results", device.label))?;
        write_table_row(
            &mut out,
            &header(&["Day", "Start Balance", "Traded Amount", "Profit", "Cumulative Profit", "End Balance"]),
        )?;
        for record in &device.records {
            let profit = if record.is_high_profit() {
                format!("*{}", format_money(record.profit))
            } else {
                format_money(record.profit)
            };
            write_table_row(
                &mut out,
                &[
                    record.day.to_string(),
                    format_money(record.start_balance),
                    format_money(record.traded_amount),
                    profit,
                    format_money(record.cumulative_profit),
                    format_money(record.end_balance),
                ],
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write the fixed-interest report for a finished calculation
pub fn write_fixed_report<W: Write, Tz: TimeZone>(
    result: &FixedResult,
    generated_at: &DateTime<Tz>,
    mut out: W,
) -> Result<(), ExportError>
where
    Tz::Offset: Display,
{
    let summary = result.summary();

    write_title(&mut out, "Fixed Interest Calculator Report", generated_at)?;

    write_section(&mut out, "Input Parameters")?;
    write_pairs(
        &mut out,
        &[
            ("Principal Amount", format_money(result.principal)),
            ("Daily Interest Rate", format!("{}%", result.daily_rate_percent)),
            ("Days", result.days.to_string()),
        ],
    )?;

    write_section(&mut out, "Summary of Results")?;
    write_pairs(
        &mut out,
        &[
            ("Principal", format_money(summary.principal)),
            ("Daily Interest", format_money(summary.daily_interest)),
            ("Total Interest", format_money(summary.total_interest)),
            ("Total Payout", format_money(summary.total_payout)),
            ("Return", format_percent(summary.return_percent)),
        ],
    )?;

    write_section(&mut out, "Daily Breakdown")?;
    write_table_row(
        &mut out,
        &header(&["Day", "Principal", "Daily Interest", "Cumulative Interest", "Current Value"]),
    )?;
    for record in &result.schedule {
        write_table_row(
            &mut out,
            &[
                record.day.to_string(),
                format_money(record.principal),
                format_money(record.daily_interest),
                format_money(record.cumulative_interest),
                format_money(record.current_value),
            ],
        )?;
    }

    out.flush()?;
    Ok(())
}

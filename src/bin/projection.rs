//! Command-line front end for the compound and fixed projection engines
//!
//! Parameters come from an optional JSON file, then from flags, then from
//! the struct defaults. Results are printed as a table (or JSON) and can be
//! exported to CSV and to a plain-text report.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use yield_projection::compound::device_label;
use yield_projection::report::{self, format_money, format_percent};
use yield_projection::{CompoundEngine, CompoundInput, CompoundResult, FixedEngine, FixedInput, FixedResult};

#[derive(Parser, Debug)]
#[command(name = "projection", version, about = "Projected returns for compound and fixed investment models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate devices compounding a daily trade profit
    Compound(CompoundArgs),
    /// Compute a fixed daily-interest schedule
    Fixed(FixedArgs),
}

/// Export and output options shared by both models
#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the daily table to this CSV file ("-" for the default name)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write a text report to this file ("-" for a dated default name)
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompoundArgs {
    /// JSON file with compound parameters
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Number of devices
    #[arg(long)]
    devices: Option<u32>,

    /// Initial deposit per device
    #[arg(long)]
    deposit: Option<f64>,

    /// Worst case trade percentage
    #[arg(long, allow_negative_numbers = true)]
    worst: Option<f64>,

    /// Best case trade percentage
    #[arg(long, allow_negative_numbers = true)]
    best: Option<f64>,

    /// Days to simulate
    #[arg(long)]
    days: Option<u32>,

    /// Seed for the trade percentage draws (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate devices in parallel, one random stream per device
    #[arg(long)]
    parallel: bool,

    /// Device shown in the table (default "Device 1") and exported to CSV (all devices when omitted)
    #[arg(long, value_name = "LABEL")]
    device: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct FixedArgs {
    /// JSON file with fixed parameters
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Principal amount
    #[arg(long)]
    principal: Option<f64>,

    /// Daily interest rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Days of interest
    #[arg(long)]
    days: Option<u32>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compound(args) => run_compound(args),
        Command::Fixed(args) => run_fixed(args),
    }
}

fn load_params<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open parameters file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("Failed to parse parameters file {}", path.display()))
        }
        None => Ok(T::default()),
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Resolve an output path, replacing "-" with the default name
fn output_path(path: &Path, default_name: impl FnOnce() -> String) -> PathBuf {
    if path.as_os_str() == "-" {
        PathBuf::from(default_name())
    } else {
        path.to_path_buf()
    }
}

fn run_compound(args: CompoundArgs) -> Result<()> {
    let mut input: CompoundInput = load_params(args.params.as_deref())?;
    if let Some(devices) = args.devices {
        input.device_count = devices;
    }
    if let Some(deposit) = args.deposit {
        input.initial_deposit_per_device = deposit;
    }
    if let Some(worst) = args.worst {
        input.worst_case_percent = worst;
    }
    if let Some(best) = args.best {
        input.best_case_percent = best;
    }
    if let Some(days) = args.days {
        input.days = days;
    }

    let engine = CompoundEngine::new(input).context("Invalid compound parameters")?;
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!("Compound simulation seed: {}", seed);

    let result = if args.parallel {
        engine.simulate_parallel(seed)
    } else {
        engine.simulate_seeded(seed)
    };

    if let Some(path) = &args.output.csv {
        let path = output_path(path, || report::COMPOUND_CSV_FILE.to_string());
        if let Some(label) = &args.device {
            result.require_device(label)?;
        }
        let out = create_output(&path)?;
        match &args.device {
            Some(label) => report::write_device_csv(&result, label, out)?,
            None => report::write_all_devices_csv(&result, out)?,
        }
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = &args.output.report {
        let path = output_path(path, || report::compound_report_file(Local::now().date_naive()));
        report::write_compound_report(engine.input(), &result, &Local::now(), create_output(&path)?)?;
        println!("Report written to {}", path.display());
    }

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_compound(engine.input(), &result, args.device.as_deref())?;
    }
    Ok(())
}

fn print_compound(input: &CompoundInput, result: &CompoundResult, device: Option<&str>) -> Result<()> {
    let label = device.map(str::to_string).unwrap_or_else(|| device_label(1));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(schedule) = result.device(&label) {
        writeln!(out, "{}", schedule.label)?;
        writeln!(
            out,
            "{:>5} {:>15} {:>15} {:>12} {:>18} {:>15}",
            "Day", "Start Balance", "Traded Amount", "Profit", "Cumulative Profit", "End Balance"
        )?;
        for record in &schedule.records {
            writeln!(
                out,
                "{:>5} {:>15} {:>15} {:>12} {:>18} {:>15}",
                record.day,
                format_money(record.start_balance),
                format_money(record.traded_amount),
                format_money(record.profit),
                format_money(record.cumulative_profit),
                format_money(record.end_balance),
            )?;
        }
    } else if device.is_some() {
        anyhow::bail!("No device named '{}' in the result", label);
    }

    let summary = result.summary(input.initial_deposit_per_device);
    writeln!(out)?;
    writeln!(out, "Final Balance:        {}", format_money(summary.combined_final_balance))?;
    writeln!(out, "Total Profit:         {}", format_money(summary.total_profit))?;
    writeln!(out, "Return on Investment: {}", format_percent(summary.roi_percent))?;
    Ok(())
}

fn run_fixed(args: FixedArgs) -> Result<()> {
    let mut input: FixedInput = load_params(args.params.as_deref())?;
    if let Some(principal) = args.principal {
        input.principal = principal;
    }
    if let Some(rate) = args.rate {
        input.daily_rate_percent = rate;
    }
    if let Some(days) = args.days {
        input.days = days;
    }

    let engine = FixedEngine::new(input).context("Invalid fixed parameters")?;
    let result = engine.simulate();

    if let Some(path) = &args.output.csv {
        let path = output_path(path, || report::FIXED_CSV_FILE.to_string());
        report::write_fixed_csv(&result, create_output(&path)?)?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = &args.output.report {
        let path = output_path(path, || report::fixed_report_file(Local::now().date_naive()));
        report::write_fixed_report(&result, &Local::now(), create_output(&path)?)?;
        println!("Report written to {}", path.display());
    }

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_fixed(&result)?;
    }
    Ok(())
}

fn print_fixed(result: &FixedResult) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{:>5} {:>15} {:>15} {:>20} {:>15}",
        "Day", "Principal", "Daily Interest", "Cumulative Interest", "Current Value"
    )?;
    for record in &result.schedule {
        writeln!(
            out,
            "{:>5} {:>15} {:>15} {:>20} {:>15}",
            record.day,
            format_money(record.principal),
            format_money(record.daily_interest),
            format_money(record.cumulative_interest),
            format_money(record.current_value),
        )?;
    }

    let summary = result.summary();
    writeln!(out)?;
    writeln!(out, "Daily Interest: {}", format_money(summary.daily_interest))?;
    writeln!(out, "Total Interest: {}", format_money(summary.total_interest))?;
    writeln!(out, "Total Payout:   {}", format_money(summary.total_payout))?;
    Ok(())
}

//! Report rendering for calculated results
//!
//! Everything here reads figures from a finished result; nothing is
//! recomputed, so exported files always agree with what was calculated.

pub mod csv;
pub mod text;

use chrono::NaiveDate;

pub use self::csv::{write_all_devices_csv, write_device_csv, write_fixed_csv};
pub use self::text::{write_compound_report, write_fixed_report};

/// Default CSV file name for the compound model
pub const COMPOUND_CSV_FILE: &str = "nft_profit_calculation.csv";

/// Default CSV file name for the fixed model
pub const FIXED_CSV_FILE: &str = "fixed_interest_calculation.csv";

/// Format an amount as dollars and cents ("$1000.90")
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a percentage with 2 decimals, or "n/a" when undefined
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{:.2}%", p),
        None => "n/a".to_string(),
    }
}

/// Default compound report file name for a given date
pub fn compound_report_file(date: NaiveDate) -> String {
    format!("Trading_Profit_Report_{}.txt", date.format("%Y-%m-%d"))
}

/// Default fixed report file name for a given date
pub fn fixed_report_file(date: NaiveDate) -> String {
    format!("Fixed_Interest_Report_{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1000.9), "$1000.90");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(12.345678), "$12.35");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(6.0)), "6.00%");
        assert_eq!(format_percent(Some(-1.5)), "-1.50%");
        assert_eq!(format_percent(None), "n/a");
    }

    #[test]
    fn test_report_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("date");
        assert_eq!(compound_report_file(date), "Trading_Profit_Report_2024-03-09.txt");
        assert_eq!(fixed_report_file(date), "Fixed_Interest_Report_2024-03-09.txt");
    }
}

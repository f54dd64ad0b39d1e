//! Two-decimal rounding shared by the engines and the reports

/// Round to 2 decimal places, ties toward positive infinity.
///
/// Computed as `round(x * 100) / 100` where `round` takes the floor of the
/// scaled value and bumps it when the fractional part is at least one half.
/// The same path must be used everywhere a figure is "rounded to cents" so
/// that stored values stay bit-identical across runs.
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // value - floor is exact for anything below 2^52
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

//! Race clock and distance formatting.

use crate::domain::model::ResultRecord;
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite_non_negative, validate_range};

pub const DEFAULT_CROSS_COUNTRY_SEASON: &str = "Cross Country";

/// Largest time (seconds) or distance (meters) a mark may hold.
pub const MAX_MARK: f64 = 1.0e9;

fn validate_mark(field_name: &str, value: f64) -> Result<()> {
    validate_finite_non_negative(field_name, value)?;
    validate_range(field_name, value, 0.0, MAX_MARK)
}

/// Cross country clock: whole seconds as `M:SS`, e.g. `1101 -> "18:21"`.
pub fn xc_time(seconds: f64) -> Result<String> {
    validate_mark("seconds", seconds)?;

    let whole = seconds.trunc() as u64;
    Ok(format!("{}:{:02}", whole / 60, whole % 60))
}

/// Track clock with hundredths: `M:SS.ss` from one minute up, `S.ss` below.
///
/// Digits past the hundredths are cut off, not rounded: `12.007 -> "12.00"`.
pub fn track_time(seconds: f64) -> Result<String> {
    validate_mark("seconds", seconds)?;

    // snap to thousandths first so 115.05 (115.04999..) keeps its last digit
    let thousandths = (seconds * 1000.0).round() as u64;
    let hundredths = thousandths / 10;

    if hundredths >= 6000 {
        let minutes = hundredths / 6000;
        let rest = hundredths % 6000;
        Ok(format!("{}:{:02}.{:02}", minutes, rest / 100, rest % 100))
    } else {
        Ok(format!("{}.{:02}", hundredths / 100, hundredths % 100))
    }
}

/// Meters with two decimals and a unit, e.g. `9.9 -> "9.90 m"`.
pub fn track_dist(meters: f64) -> Result<String> {
    validate_mark("meters", meters)?;

    // round half up before formatting; `{:.2}` alone sends 0.125 to 0.12
    let rounded = (meters * 100.0).round() / 100.0;
    Ok(format!("{:.2} m", rounded))
}

/// Picks the formatter a record's mark is shown with.
pub fn format_performance(record: &ResultRecord, cross_country_seasons: &[String]) -> Result<String> {
    if record.distance_result {
        return track_dist(record.performance);
    }

    let season = record.event.season.trim();
    if cross_country_seasons
        .iter()
        .any(|xc| xc.trim().eq_ignore_ascii_case(season))
    {
        xc_time(record.performance)
    } else {
        track_time(record.performance)
    }
}

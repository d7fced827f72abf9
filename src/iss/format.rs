use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

use super::cardinal::Cardinal;
use super::error::FormatError;
use super::types::{PassRecord, VisiblePass};

const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";
const LOCAL_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p %Z";
const GUIDE_TIME_FORMAT: &str = "%I:%M %p";

/// Human-readable viewing report for one pass. Never fails: problems are
/// reported inside the returned text.
pub fn format_pass(pass: &VisiblePass, timezone: &str) -> String {
    try_format_pass(pass, timezone).unwrap_or_else(|e| error_text(&e))
}

pub fn format_record(record: &PassRecord, timezone: &str) -> String {
    match record {
        PassRecord::Valid(pass) => format_pass(pass, timezone),
        PassRecord::Malformed(reason) => error_text(&FormatError::Malformed(reason.clone())),
    }
}

fn error_text(e: &FormatError) -> String {
    format!("Error formatting pass information: {}", e)
}

fn try_format_pass(pass: &VisiblePass, timezone: &str) -> Result<String, FormatError> {
    let utc_start = utc_instant(pass.start_utc)?;
    let utc_end = utc_instant(pass.end_utc)?;

    let zone: Tz = timezone
        .parse()
        .map_err(|_| FormatError::UnknownTimezone(timezone.to_string()))?;
    let local_start = utc_start.with_timezone(&zone);
    let local_end = utc_end.with_timezone(&zone);

    for (name, value) in [
        ("startAz", pass.start_azimuth_deg),
        ("maxEl", pass.max_elevation_deg),
        ("endAz", pass.end_azimuth_deg),
    ] {
        if !value.is_finite() {
            return Err(FormatError::Malformed(format!("{} is not a number", name)));
        }
    }

    let start_dir = Cardinal::from_azimuth(pass.start_azimuth_deg);
    let end_dir = Cardinal::from_azimuth(pass.end_azimuth_deg);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "UTC Times:");
    let _ = writeln!(out, "  Start: {}", utc_start.format(UTC_FORMAT));
    let _ = writeln!(out, "  End: {}", utc_end.format(UTC_FORMAT));
    let _ = writeln!(out);
    let _ = writeln!(out, "Local Times ({}):", timezone);
    let _ = writeln!(out, "  Start: {}", local_start.format(LOCAL_FORMAT));
    let _ = writeln!(out, "  End: {}", local_end.format(LOCAL_FORMAT));
    let _ = writeln!(out);
    let _ = writeln!(out, "Viewing Details:");
    let _ = writeln!(
        out,
        "  Starting direction: {}° ({})",
        pass.start_azimuth_deg, start_dir
    );
    let _ = writeln!(out, "  Maximum Elevation: {}°", pass.max_elevation_deg);
    let _ = writeln!(
        out,
        "  Ending direction: {}° ({})",
        pass.end_azimuth_deg, end_dir
    );
    let _ = writeln!(out, "  Duration: {} seconds", pass.duration_seconds);
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Viewing guide: Look {} at {}, the ISS will rise to {}° above horizon and set {}",
        start_dir,
        local_start.format(GUIDE_TIME_FORMAT),
        pass.max_elevation_deg,
        end_dir
    );

    Ok(out)
}

fn utc_instant(epoch_seconds: i64) -> Result<DateTime<Utc>, FormatError> {
    DateTime::from_timestamp(epoch_seconds, 0).ok_or(FormatError::InvalidTimestamp(epoch_seconds))
}

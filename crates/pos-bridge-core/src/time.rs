// Wall-clock time formatting for IANA zones.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{BridgeError, Result};

/// Default pattern: 12-hour time plus zone abbreviation, e.g. "04:16 PM EDT".
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p %Z";

/// Render the current wall-clock time in the given zone.
///
/// `format` falls back to [`DEFAULT_TIME_FORMAT`]. An unknown zone name is an
/// explicit error rather than a placeholder string.
pub fn current_time(zone: &str, format: Option<&str>) -> Result<String> {
    format_time_at(Utc::now(), zone, format)
}

/// Same as [`current_time`] but for an injected instant, so tests can pin
/// the clock.
pub fn format_time_at(instant: DateTime<Utc>, zone: &str, format: Option<&str>) -> Result<String> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| BridgeError::InvalidTimeZone(zone.to_string()))?;

    Ok(instant
        .with_timezone(&tz)
        .format(format.unwrap_or(DEFAULT_TIME_FORMAT))
        .to_string())
}

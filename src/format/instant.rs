// A point in time in any of the shapes callers hand us: epoch milliseconds,
// a chrono date-time, or an ISO-8601 string.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Naive layouts accepted for strings without an offset. Interpreted as local time.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Instant {
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    DateTime(DateTime<Utc>),
    /// Unparsed text, usually ISO-8601.
    Text(String),
}

impl Instant {
    /// Resolve to a UTC date-time, or `None` when the value is not a valid instant.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Instant::Millis(ms) => from_millis(*ms),
            Instant::DateTime(dt) => Some(*dt),
            Instant::Text(text) => parse_text(text),
        }
    }

    /// Epoch milliseconds of a valid instant.
    pub fn epoch_millis(&self) -> Option<f64> {
        match self {
            Instant::Millis(ms) => from_millis(*ms).map(|_| ms.trunc()),
            other => other.resolve().map(|dt| dt.timestamp_millis() as f64),
        }
    }
}

fn from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    let ms = ms.trunc();
    if ms.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64)
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // Date-only forms are UTC midnight, date-time forms without an offset are local.
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::Millis(ms) if ms.is_infinite() => {
                f.write_str(if *ms > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Instant::Millis(ms) => write!(f, "{ms}"),
            Instant::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Instant::Text(text) => f.write_str(text),
        }
    }
}

/// Numbers are epoch milliseconds; anything else is kept as text.
impl FromStr for Instant {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(ms) => Instant::Millis(ms),
            Err(_) => Instant::Text(s.to_string()),
        })
    }
}

impl From<f64> for Instant {
    fn from(ms: f64) -> Self {
        Instant::Millis(ms)
    }
}

impl From<i64> for Instant {
    fn from(ms: i64) -> Self {
        Instant::Millis(ms as f64)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Instant::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<DateTime<Local>> for Instant {
    fn from(dt: DateTime<Local>) -> Self {
        Instant::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::DateTime(time.into())
    }
}

impl From<&str> for Instant {
    fn from(text: &str) -> Self {
        Instant::Text(text.to_string())
    }
}

impl From<String> for Instant {
    fn from(text: String) -> Self {
        Instant::Text(text)
    }
}

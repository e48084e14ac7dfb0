// Time zone used to lay out calendar fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    /// The host's local zone.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

static DEFAULT_ZONE: RwLock<Zone> = parking_lot::const_rwlock(Zone::Local);

/// The zone used when neither the caller nor the field options pick one.
pub fn default_zone() -> Zone {
    *DEFAULT_ZONE.read()
}

pub fn set_default_zone(zone: Zone) {
    *DEFAULT_ZONE.write() = zone;
}

impl Zone {
    pub(crate) fn apply(&self, dt: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => dt.with_timezone(&Local).fixed_offset(),
            Zone::Utc => dt.fixed_offset(),
            Zone::Fixed(offset) => dt.with_timezone(offset),
        }
    }
}

/// Parse `+HH:MM`, `+HHMM` or `+HH`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = if digits.len() <= 2 {
        (digits.parse::<i32>().ok()?, 0)
    } else {
        let split = digits.len() - 2;
        (digits[..split].parse::<i32>().ok()?, digits[split..].parse::<i32>().ok()?)
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for Zone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => Ok(Zone::Local),
            "utc" | "gmt" | "z" => Ok(Zone::Utc),
            _ => parse_offset(trimmed)
                .map(Zone::Fixed)
                .ok_or_else(|| Error::InvalidZone(s.to_string())),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Utc => f.write_str("utc"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

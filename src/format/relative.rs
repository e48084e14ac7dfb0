// Relative phrases ("2 days ago", "in 3 hours", "yesterday").
//
// The difference is bucketed into the coarsest readable unit. Month and year
// buckets count whole calendar months rather than dividing days by 30.

use chrono::{DateTime, Datelike, Utc};

use super::instant::Instant;
use crate::locale::{self, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl RelativeUnit {
    pub(crate) fn index(self) -> usize {
        match self {
            RelativeUnit::Second => 0,
            RelativeUnit::Minute => 1,
            RelativeUnit::Hour => 2,
            RelativeUnit::Day => 3,
            RelativeUnit::Month => 4,
            RelativeUnit::Year => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RelativeUnit::Second => "second",
            RelativeUnit::Minute => "minute",
            RelativeUnit::Hour => "hour",
            RelativeUnit::Day => "day",
            RelativeUnit::Month => "month",
            RelativeUnit::Year => "year",
        }
    }
}

/// A bucketed time difference. Positive values lie in the future, negative
/// values in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub value: i64,
    pub unit: RelativeUnit,
}

impl RelativeTime {
    /// Bucket the distance from `now` to `target`.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = now.signed_duration_since(target).num_milliseconds();
        let is_future = diff_ms < 0;
        let sign = if is_future { 1 } else { -1 };

        let secs = round_div(diff_ms.unsigned_abs(), 1000);
        let mins = round_div(secs, 60);
        let hours = round_div(mins, 60);
        let days = round_div(hours, 24);

        let (count, unit) = if secs < 60 {
            (secs, RelativeUnit::Second)
        } else if mins < 60 {
            (mins, RelativeUnit::Minute)
        } else if hours < 24 {
            (hours, RelativeUnit::Hour)
        } else if days < 30 {
            (days, RelativeUnit::Day)
        } else {
            let (earlier, later) = if is_future { (now, target) } else { (target, now) };
            let months = complete_months(earlier, later).max(1);
            if months < 12 {
                (months, RelativeUnit::Month)
            } else {
                ((months / 12).max(1), RelativeUnit::Year)
            }
        };

        Self {
            value: sign * count as i64,
            unit,
        }
    }

    pub fn is_future(&self) -> bool {
        self.value > 0
    }

    /// Render with the locale's wording, preferring idiomatic words
    /// ("yesterday", "next month") where the locale has them.
    pub fn render(&self, locale: &Locale) -> String {
        let rules = &locale.rules().relative;
        if let Some(word) = (rules.auto_word)(self.unit, self.value) {
            return word.to_string();
        }

        let count = self.value.unsigned_abs();
        let words = &rules.units[self.unit.index()];
        let unit = if (rules.is_one)(count) { words.one } else { words.other };
        let affix = if self.is_future() { &rules.future } else { &rules.past };
        format!("{}{} {}{}", affix.prefix, count, unit, affix.suffix)
    }
}

/// Integer division rounding half up.
fn round_div(value: u64, divisor: u64) -> u64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`.
fn complete_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> u64 {
    let index = |dt: &DateTime<Utc>| i64::from(dt.year()) * 12 + i64::from(dt.month0());
    let mut months = index(&later) - index(&earlier);
    // The final month only counts once the later instant reaches the same
    // day and time of month.
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months.max(0) as u64
}

/// Relative phrase for `target` measured from the current wall-clock time.
pub fn format_relative_time(target: &Instant, locale: Option<&Locale>) -> String {
    format_relative_time_at(target, Utc::now(), locale)
}

/// Relative phrase for `target` measured from an explicit `now`.
/// An unresolvable target is returned as its original text.
pub fn format_relative_time_at(
    target: &Instant,
    now: DateTime<Utc>,
    locale: Option<&Locale>,
) -> String {
    match target.resolve() {
        Some(target) => RelativeTime::between(target, now).render(&locale::resolve(locale)),
        None => {
            tracing::debug!("unparseable instant {:?}, echoing input", target);
            target.to_string()
        }
    }
}

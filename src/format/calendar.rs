// Calendar formatting from named presets or caller-selected fields.
//
// Field names and styles mirror the `Intl.DateTimeFormat` option vocabulary so
// option bundles can be passed around as JSON (`{"month":"long","day":"numeric"}`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use super::instant::Instant;
use super::relative::format_relative_time;
use super::zone::{default_zone, Zone};
use crate::error::{Error, Result};
use crate::locale::{self, Locale, Rules};

// ── Presets ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatPreset {
    /// `MM:SS` or `HH:MM:SS`.
    Duration,
    /// "2 days ago", "in 3 hours".
    Relative,
    /// "Mar 15, 2023"
    Date,
    /// "3:45 PM"
    Time,
    /// "Mar 15, 2023, 3:45 PM"
    #[default]
    Datetime,
    /// "3/15/23"
    ShortDate,
    /// "15:45"
    ShortTime,
    /// "3/15, 15:45"
    ShortDatetime,
    /// "March 2023"
    YearMonth,
    /// "March 15"
    MonthDay,
    /// "Wednesday"
    Weekday,
    /// Caller-supplied [`FieldOptions`].
    Custom,
}

impl FormatPreset {
    pub fn name(&self) -> &'static str {
        match self {
            FormatPreset::Duration => "duration",
            FormatPreset::Relative => "relative",
            FormatPreset::Date => "date",
            FormatPreset::Time => "time",
            FormatPreset::Datetime => "datetime",
            FormatPreset::ShortDate => "shortDate",
            FormatPreset::ShortTime => "shortTime",
            FormatPreset::ShortDatetime => "shortDatetime",
            FormatPreset::YearMonth => "yearMonth",
            FormatPreset::MonthDay => "monthDay",
            FormatPreset::Weekday => "weekday",
            FormatPreset::Custom => "custom",
        }
    }

    pub fn all() -> &'static [FormatPreset] {
        &[
            FormatPreset::Duration,
            FormatPreset::Relative,
            FormatPreset::Date,
            FormatPreset::Time,
            FormatPreset::Datetime,
            FormatPreset::ShortDate,
            FormatPreset::ShortTime,
            FormatPreset::ShortDatetime,
            FormatPreset::YearMonth,
            FormatPreset::MonthDay,
            FormatPreset::Weekday,
            FormatPreset::Custom,
        ]
    }

    /// Field bundle for calendar presets. `None` for `duration`, `relative`
    /// and `custom`, which do not map to a fixed bundle.
    pub fn field_options(&self) -> Option<FieldOptions> {
        match self {
            FormatPreset::Date => Some(FieldOptions::DATE),
            FormatPreset::Time => Some(FieldOptions::TIME),
            FormatPreset::Datetime => Some(FieldOptions::DATETIME),
            FormatPreset::ShortDate => Some(FieldOptions::SHORT_DATE),
            FormatPreset::ShortTime => Some(FieldOptions::SHORT_TIME),
            FormatPreset::ShortDatetime => Some(FieldOptions::SHORT_DATETIME),
            FormatPreset::YearMonth => Some(FieldOptions::YEAR_MONTH),
            FormatPreset::MonthDay => Some(FieldOptions::MONTH_DAY),
            FormatPreset::Weekday => Some(FieldOptions::WEEKDAY),
            FormatPreset::Duration | FormatPreset::Relative | FormatPreset::Custom => None,
        }
    }

    /// Parse a preset name, falling back to `datetime` for unknown names.
    pub fn from_name_lenient(name: &str) -> FormatPreset {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!("unknown format preset {:?}, using datetime", name);
            FormatPreset::Datetime
        })
    }
}

impl fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the camelCase names as well as kebab and snake spellings
/// (`shortDate`, `short-date`, `short_date`).
impl FromStr for FormatPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        FormatPreset::all()
            .iter()
            .copied()
            .find(|preset| preset.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

// ── Field options ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "long")]
    Long,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "narrow")]
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Long,
    Short,
    Narrow,
}

/// Which calendar fields to show and how. Absent fields are omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<NumericStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<MonthStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<NumericStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<NumericStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<NumericStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<NumericStyle>,
    /// Force a 12- or 24-hour clock instead of the locale default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<Zone>,
}

impl FieldOptions {
    pub const EMPTY: FieldOptions = FieldOptions {
        weekday: None,
        year: None,
        month: None,
        day: None,
        hour: None,
        minute: None,
        second: None,
        hour12: None,
        time_zone: None,
    };

    pub const DATE: FieldOptions = FieldOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::Short),
        day: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    pub const TIME: FieldOptions = FieldOptions {
        hour: Some(NumericStyle::Numeric),
        minute: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    pub const DATETIME: FieldOptions = FieldOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::Short),
        day: Some(NumericStyle::Numeric),
        hour: Some(NumericStyle::Numeric),
        minute: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    pub const SHORT_DATE: FieldOptions = FieldOptions {
        year: Some(NumericStyle::TwoDigit),
        month: Some(MonthStyle::Numeric),
        day: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    pub const SHORT_TIME: FieldOptions = FieldOptions {
        hour: Some(NumericStyle::Numeric),
        minute: Some(NumericStyle::Numeric),
        hour12: Some(false),
        ..FieldOptions::EMPTY
    };

    pub const SHORT_DATETIME: FieldOptions = FieldOptions {
        month: Some(MonthStyle::Numeric),
        day: Some(NumericStyle::Numeric),
        hour: Some(NumericStyle::Numeric),
        minute: Some(NumericStyle::Numeric),
        hour12: Some(false),
        ..FieldOptions::EMPTY
    };

    pub const YEAR_MONTH: FieldOptions = FieldOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::Long),
        ..FieldOptions::EMPTY
    };

    pub const MONTH_DAY: FieldOptions = FieldOptions {
        month: Some(MonthStyle::Long),
        day: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    pub const WEEKDAY: FieldOptions = FieldOptions {
        weekday: Some(TextStyle::Long),
        ..FieldOptions::EMPTY
    };

    /// Fallback when no date or time field is requested: "3/15/2023".
    pub const NUMERIC_DATE: FieldOptions = FieldOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::Numeric),
        day: Some(NumericStyle::Numeric),
        ..FieldOptions::EMPTY
    };

    /// Whether any date or time field is requested. `hour12` and `time_zone`
    /// alone do not count.
    pub fn has_components(&self) -> bool {
        self.weekday.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
    }

    pub fn with_time_zone(mut self, zone: Zone) -> Self {
        self.time_zone = Some(zone);
        self
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// Rendered date fields handed to a locale's layout function.
#[derive(Debug, Default)]
pub(crate) struct DateParts {
    pub weekday: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub month_is_text: bool,
    pub month_is_long: bool,
}

impl DateParts {
    pub fn weekday(&self) -> Option<&str> {
        self.weekday.as_deref()
    }

    pub fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }
}

fn numeric(value: u32, style: NumericStyle, pad: bool) -> String {
    if pad || style == NumericStyle::TwoDigit {
        format!("{value:02}")
    } else {
        value.to_string()
    }
}

fn narrow(name: &str) -> String {
    name.chars().take(1).flat_map(char::to_uppercase).collect()
}

fn text_name(long: &[&str], short: &[&str], index: usize, style: TextStyle) -> String {
    match style {
        TextStyle::Long => long[index].to_string(),
        TextStyle::Short => short[index].to_string(),
        TextStyle::Narrow => narrow(long[index]),
    }
}

fn render_date(dt: &DateTime<FixedOffset>, fields: &FieldOptions, rules: &Rules) -> String {
    let month_is_text = matches!(
        fields.month,
        Some(MonthStyle::Long | MonthStyle::Short | MonthStyle::Narrow)
    );
    let pad = rules.pad_numeric_date && !month_is_text;
    let month_index = dt.month0() as usize;

    let parts = DateParts {
        weekday: fields.weekday.map(|style| {
            let index = dt.weekday().num_days_from_monday() as usize;
            text_name(&rules.weekdays_long, &rules.weekdays_short, index, style)
        }),
        day: fields.day.map(|style| numeric(dt.day(), style, pad)),
        month: fields.month.map(|style| match style {
            MonthStyle::Numeric => numeric(dt.month(), NumericStyle::Numeric, pad),
            MonthStyle::TwoDigit => numeric(dt.month(), NumericStyle::TwoDigit, pad),
            MonthStyle::Long => rules.months_long[month_index].to_string(),
            MonthStyle::Short => rules.months_short[month_index].to_string(),
            MonthStyle::Narrow => narrow(rules.months_long[month_index]),
        }),
        year: fields.year.map(|style| match style {
            NumericStyle::Numeric => dt.year().to_string(),
            NumericStyle::TwoDigit => format!("{:02}", dt.year().rem_euclid(100)),
        }),
        month_is_text,
        month_is_long: fields.month == Some(MonthStyle::Long),
    };

    (rules.compose_date)(&parts)
}

fn render_time(dt: &DateTime<FixedOffset>, fields: &FieldOptions, rules: &Rules) -> String {
    let minute = fields.minute.map(|_| format!("{:02}", dt.minute()));
    let second = fields.second.map(|_| format!("{:02}", dt.second()));

    let Some(hour_style) = fields.hour else {
        // Minutes and seconds on their own.
        return match (fields.minute, fields.second) {
            (Some(style), Some(_)) => {
                format!("{}:{:02}", numeric(dt.minute(), style, false), dt.second())
            }
            (Some(style), None) => numeric(dt.minute(), style, false),
            (None, Some(style)) => numeric(dt.second(), style, false),
            (None, None) => String::new(),
        };
    };

    let hour12 = fields.hour12.unwrap_or(rules.hour12);
    let has_minutes = minute.is_some() || second.is_some();
    let mut text = if hour12 {
        let hour = match dt.hour() % 12 {
            0 => 12,
            h => h,
        };
        numeric(hour, hour_style, false)
    } else {
        numeric(dt.hour(), hour_style, has_minutes)
    };
    for part in [minute, second].into_iter().flatten() {
        text.push(':');
        text.push_str(&part);
    }

    if hour12 {
        let period = if dt.hour() < 12 { rules.am } else { rules.pm };
        format!("{text} {period}")
    } else if !has_minutes {
        format!("{text}{}", rules.hour_suffix)
    } else {
        text
    }
}

/// Lay out a resolved date-time with explicit field options. The zone comes
/// from `fields.time_zone`, else the process default. A bundle without any
/// date or time field renders numeric year, month and day.
pub fn format_fields(dt: &DateTime<Utc>, fields: &FieldOptions, locale: &Locale) -> String {
    let zone = fields.time_zone.unwrap_or_else(default_zone);
    let local = zone.apply(dt);
    let rules = locale.rules();

    let fields = if fields.has_components() {
        *fields
    } else {
        FieldOptions {
            hour12: fields.hour12,
            time_zone: fields.time_zone,
            ..FieldOptions::NUMERIC_DATE
        }
    };
    let date = render_date(&local, &fields, rules);
    let time = render_time(&local, &fields, rules);
    match (date.is_empty(), time.is_empty()) {
        (false, false) => format!("{date}{}{time}", rules.datetime_separator),
        (false, true) => date,
        (true, _) => time,
    }
}

/// Format an instant with a preset in the process-default zone.
pub fn format_date_time(
    instant: &Instant,
    preset: FormatPreset,
    locale: Option<&Locale>,
    custom_fields: Option<&FieldOptions>,
) -> String {
    format_date_time_in(instant, preset, locale, custom_fields, default_zone())
}

/// Format an instant with a preset. `zone` applies unless the custom fields
/// carry their own time zone. Invalid instants are echoed back unchanged.
pub fn format_date_time_in(
    instant: &Instant,
    preset: FormatPreset,
    locale: Option<&Locale>,
    custom_fields: Option<&FieldOptions>,
    zone: Zone,
) -> String {
    let locale = locale::resolve(locale);

    let fields = match preset {
        FormatPreset::Relative => return format_relative_time(instant, Some(&locale)),
        // Epoch milliseconds reread as an elapsed seconds count.
        FormatPreset::Duration => {
            return match instant.epoch_millis() {
                Some(ms) => format_duration((ms / 1000.0).floor(), false),
                None => instant.to_string(),
            };
        }
        FormatPreset::Custom => match custom_fields {
            Some(fields) => *fields,
            None => {
                tracing::debug!("custom preset without fields, using date");
                FieldOptions::DATE
            }
        },
        calendar => calendar.field_options().unwrap_or(FieldOptions::DATETIME),
    };

    match instant.resolve() {
        Some(dt) => {
            let fields = FieldOptions {
                time_zone: Some(fields.time_zone.unwrap_or(zone)),
                ..fields
            };
            format_fields(&dt, &fields, &locale)
        }
        None => {
            tracing::debug!("unparseable instant {:?}, echoing input", instant);
            instant.to_string()
        }
    }
}

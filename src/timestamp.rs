// Display model behind a timestamp label: picks a default format from the
// value's shape and resolves the text to show. Refresh scheduling is left to
// the host; `refresh_interval` only says whether and how often to re-render.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::TimestampConfig;
use crate::format::{
    format_date_time, format_duration, format_relative_time_at, FieldOptions, FormatPreset,
    Instant,
};
use crate::locale::Locale;

pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(60);

/// The raw value a timestamp displays.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampValue {
    /// Seconds under the `duration` format, epoch milliseconds otherwise.
    Number(f64),
    DateTime(DateTime<Utc>),
    /// ISO-8601 text; anything unparseable is shown verbatim.
    Text(String),
}

impl From<f64> for TimestampValue {
    fn from(n: f64) -> Self {
        TimestampValue::Number(n)
    }
}

impl From<i64> for TimestampValue {
    fn from(n: i64) -> Self {
        TimestampValue::Number(n as f64)
    }
}

impl From<DateTime<Utc>> for TimestampValue {
    fn from(dt: DateTime<Utc>) -> Self {
        TimestampValue::DateTime(dt)
    }
}

impl From<&str> for TimestampValue {
    fn from(text: &str) -> Self {
        TimestampValue::Text(text.to_string())
    }
}

impl From<String> for TimestampValue {
    fn from(text: String) -> Self {
        TimestampValue::Text(text)
    }
}

#[derive(Debug, Clone)]
pub struct Timestamp {
    pub value: TimestampValue,
    /// Explicit format; `None` picks one from the value.
    pub format: Option<FormatPreset>,
    /// Field options for the `custom` format.
    pub custom_format: Option<FieldOptions>,
    pub locale: Option<Locale>,
    pub auto_update: bool,
    pub update_interval: Duration,
}

impl Timestamp {
    pub fn new(value: impl Into<TimestampValue>) -> Self {
        Self {
            value: value.into(),
            format: None,
            custom_format: None,
            locale: None,
            auto_update: true,
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }

    /// Take auto-update settings from the `[timestamp]` config section.
    pub fn configured(mut self, config: &TimestampConfig) -> Self {
        self.auto_update = config.auto_update;
        self.update_interval = Duration::from_millis(config.update_interval_ms);
        self
    }

    pub fn with_format(mut self, format: FormatPreset) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_custom_format(mut self, fields: FieldOptions) -> Self {
        self.format = Some(FormatPreset::Custom);
        self.custom_format = Some(fields);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Numbers default to `duration`, everything else to `relative`.
    pub fn effective_format(&self) -> FormatPreset {
        self.format.unwrap_or(match self.value {
            TimestampValue::Number(_) => FormatPreset::Duration,
            _ => FormatPreset::Relative,
        })
    }

    pub fn display(&self) -> String {
        self.display_at(Utc::now())
    }

    /// Text to show, with relative phrases measured from `now`.
    pub fn display_at(&self, now: DateTime<Utc>) -> String {
        let format = self.effective_format();
        let locale = self.locale.as_ref();

        let instant = match &self.value {
            TimestampValue::Number(seconds) if format == FormatPreset::Duration => {
                return format_duration(*seconds, *seconds >= 3600.0);
            }
            TimestampValue::Number(ms) => Instant::Millis(*ms),
            TimestampValue::DateTime(dt) => Instant::DateTime(*dt),
            TimestampValue::Text(text) => Instant::Text(text.clone()),
        };

        match format {
            FormatPreset::Relative => format_relative_time_at(&instant, now, locale),
            other => format_date_time(&instant, other, locale, self.custom_format.as_ref()),
        }
    }

    /// How often a host should re-render, if at all. Only relative phrases
    /// go stale on their own.
    pub fn refresh_interval(&self) -> Option<Duration> {
        let stale = self.auto_update
            && self.effective_format() == FormatPreset::Relative
            && !self.update_interval.is_zero();
        stale.then_some(self.update_interval)
    }
}

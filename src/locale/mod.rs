//! Locale support for relative-time wording and calendar field layout.
//!
//! Structure:
//! - mod.rs: the [`Locale`] enum, tag parsing, and the process-wide default
//! - en.rs, de.rs, fr.rs, es.rs: per-language wording and date layout

mod de;
mod en;
mod es;
mod fr;

use std::fmt;

use parking_lot::RwLock;

use crate::format::calendar::DateParts;
use crate::format::relative::RelativeUnit;

/// Supported locales. Anything else falls back to [`Locale::EnglishUs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnglishUs,
    EnglishGb,
    German,
    French,
    Spanish,
}

static DEFAULT_LOCALE: RwLock<Locale> = parking_lot::const_rwlock(Locale::EnglishUs);

/// Regions that follow British rather than American conventions.
const GB_REGIONS: &[&str] = &["GB", "UK", "IE", "AU", "NZ", "IN", "ZA"];

impl Locale {
    /// BCP-47 tag for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnglishUs => "en-US",
            Locale::EnglishGb => "en-GB",
            Locale::German => "de",
            Locale::French => "fr",
            Locale::Spanish => "es",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnglishUs => "English (US)",
            Locale::EnglishGb => "English (UK)",
            Locale::German => "Deutsch",
            Locale::French => "Français",
            Locale::Spanish => "Español",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[
            Locale::EnglishUs,
            Locale::EnglishGb,
            Locale::German,
            Locale::French,
            Locale::Spanish,
        ]
    }

    /// Match a language tag (`en`, `en-GB`, `de_AT.UTF-8`, ...) against the
    /// supported set. Returns `None` when the language is not supported.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let tag = tag.split(['.', '@']).next().unwrap_or_default().trim();
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        match language.as_str() {
            "en" => match region.as_deref() {
                Some(r) if GB_REGIONS.contains(&r) => Some(Locale::EnglishGb),
                _ => Some(Locale::EnglishUs),
            },
            "c" | "posix" => Some(Locale::EnglishUs),
            "de" => Some(Locale::German),
            "fr" => Some(Locale::French),
            "es" => Some(Locale::Spanish),
            _ => None,
        }
    }

    /// Lenient parse: unsupported tags resolve to the default English locale.
    pub fn parse(tag: &str) -> Locale {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::debug!("unsupported locale {:?}, using en-US", tag);
            Locale::EnglishUs
        })
    }

    /// Locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, first supported one wins.
    pub fn from_env() -> Option<Locale> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .filter(|value| !value.is_empty())
            .find_map(|value| Self::from_tag(&value))
    }

    pub(crate) fn rules(&self) -> &'static Rules {
        match self {
            Locale::EnglishUs => &en::US,
            Locale::EnglishGb => &en::GB,
            Locale::German => &de::RULES,
            Locale::French => &fr::RULES,
            Locale::Spanish => &es::RULES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::parse(tag)
    }
}

/// The locale used when a caller passes `None`.
pub fn default_locale() -> Locale {
    *DEFAULT_LOCALE.read()
}

/// Replace the process-wide default locale. Usually called once at startup.
pub fn set_default_locale(locale: Locale) {
    *DEFAULT_LOCALE.write() = locale;
}

pub(crate) fn resolve(locale: Option<&Locale>) -> Locale {
    locale.copied().unwrap_or_else(default_locale)
}

// ── Rule tables ──────────────────────────────────────────────────────────────

/// Singular and plural spelling of a relative-time unit.
pub(crate) struct UnitWords {
    pub one: &'static str,
    pub other: &'static str,
}

/// Text wrapped around a quantity, e.g. `("", " ago")` or `("in ", "")`.
pub(crate) struct Affix {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

pub(crate) struct RelativeRules {
    pub past: Affix,
    pub future: Affix,
    /// Indexed by [`RelativeUnit::index`].
    pub units: [UnitWords; 6],
    /// Whether a count takes the singular form.
    pub is_one: fn(u64) -> bool,
    /// Idiomatic phrase for a signed value (`numeric: "auto"`), if any.
    pub auto_word: fn(RelativeUnit, i64) -> Option<&'static str>,
}

pub(crate) struct Rules {
    pub months_long: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Monday first, matching `chrono::Weekday::num_days_from_monday`.
    pub weekdays_long: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    /// Default clock when a format does not force one.
    pub hour12: bool,
    pub am: &'static str,
    pub pm: &'static str,
    /// Appended to a lone 24-hour value ("15 Uhr").
    pub hour_suffix: &'static str,
    /// Numeric day and month are zero-padded ("03/05" rather than "3/5").
    pub pad_numeric_date: bool,
    pub datetime_separator: &'static str,
    pub compose_date: fn(&DateParts) -> String,
    pub relative: RelativeRules,
}

/// Join the present values with `sep`.
pub(crate) fn join_present(values: &[Option<&str>], sep: &str) -> String {
    values
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Prefix a composed date with its weekday, if one was requested.
pub(crate) fn with_weekday(weekday: Option<&str>, date: String, sep: &str) -> String {
    match weekday {
        Some(wd) if date.is_empty() => wd.to_string(),
        Some(wd) => format!("{wd}{sep}{date}"),
        None => date,
    }
}

// Calendar presets, custom field bundles, zones, and locale layouts.

use chrono::{TimeZone, Utc};

use scilent::format::{
    format_date_time_in, format_fields, FieldOptions, FormatPreset, Instant, MonthStyle,
    NumericStyle, TextStyle, Zone,
};
use scilent::locale::Locale;
use scilent::Error;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Wednesday 15 March 2023, 15:45:30 UTC.
const SAMPLE_MS: i64 = 1_678_895_130_000;

fn sample() -> Instant {
    Instant::from(SAMPLE_MS)
}

fn fmt(preset: FormatPreset, locale: Locale) -> String {
    format_date_time_in(&sample(), preset, Some(&locale), None, Zone::Utc)
}

fn custom(fields: FieldOptions, locale: Locale) -> String {
    format_date_time_in(
        &sample(),
        FormatPreset::Custom,
        Some(&locale),
        Some(&fields),
        Zone::Utc,
    )
}

// ── Presets ──────────────────────────────────────────────────────────────────

#[test]
fn test_presets_en_us() {
    let l = Locale::EnglishUs;
    assert_eq!(fmt(FormatPreset::Date, l), "Mar 15, 2023");
    assert_eq!(fmt(FormatPreset::Time, l), "3:45 PM");
    assert_eq!(fmt(FormatPreset::Datetime, l), "Mar 15, 2023, 3:45 PM");
    assert_eq!(fmt(FormatPreset::ShortDate, l), "3/15/23");
    assert_eq!(fmt(FormatPreset::ShortTime, l), "15:45");
    assert_eq!(fmt(FormatPreset::ShortDatetime, l), "3/15, 15:45");
    assert_eq!(fmt(FormatPreset::YearMonth, l), "March 2023");
    assert_eq!(fmt(FormatPreset::MonthDay, l), "March 15");
    assert_eq!(fmt(FormatPreset::Weekday, l), "Wednesday");
}

#[test]
fn test_presets_en_gb() {
    let l = Locale::EnglishGb;
    assert_eq!(fmt(FormatPreset::Date, l), "15 Mar 2023");
    assert_eq!(fmt(FormatPreset::Time, l), "15:45");
    assert_eq!(fmt(FormatPreset::Datetime, l), "15 Mar 2023, 15:45");
    assert_eq!(fmt(FormatPreset::ShortDate, l), "15/03/23");
    assert_eq!(fmt(FormatPreset::MonthDay, l), "15 March");
}

#[test]
fn test_presets_german() {
    let l = Locale::German;
    assert_eq!(fmt(FormatPreset::Date, l), "15. März 2023");
    assert_eq!(fmt(FormatPreset::ShortDate, l), "15.3.23");
    assert_eq!(fmt(FormatPreset::ShortDatetime, l), "15.3., 15:45");
    assert_eq!(fmt(FormatPreset::YearMonth, l), "März 2023");
    assert_eq!(fmt(FormatPreset::Weekday, l), "Mittwoch");
}

#[test]
fn test_presets_french_and_spanish() {
    assert_eq!(fmt(FormatPreset::Date, Locale::French), "15 mars 2023");
    assert_eq!(fmt(FormatPreset::Datetime, Locale::French), "15 mars 2023 15:45");
    assert_eq!(fmt(FormatPreset::ShortDate, Locale::French), "15/03/23");
    assert_eq!(fmt(FormatPreset::Weekday, Locale::French), "mercredi");

    assert_eq!(fmt(FormatPreset::Date, Locale::Spanish), "15 mar 2023");
    assert_eq!(fmt(FormatPreset::MonthDay, Locale::Spanish), "15 de marzo");
    assert_eq!(fmt(FormatPreset::YearMonth, Locale::Spanish), "marzo de 2023");
}

#[test]
fn test_midnight_on_twelve_hour_clock() {
    let midnight = Instant::from(Utc.with_ymd_and_hms(2023, 3, 15, 0, 5, 0).unwrap());
    let text = format_date_time_in(
        &midnight,
        FormatPreset::Time,
        Some(&Locale::EnglishUs),
        None,
        Zone::Utc,
    );
    assert_eq!(text, "12:05 AM");
}

// ── Delegating presets ───────────────────────────────────────────────────────

#[test]
fn test_duration_preset_reads_millis_as_seconds() {
    let run = |ms: f64| {
        format_date_time_in(&Instant::Millis(ms), FormatPreset::Duration, None, None, Zone::Utc)
    };
    assert_eq!(run(65_000.0), "01:05");
    assert_eq!(run(3_661_999.0), "01:01:01");
    assert_eq!(run(-65_000.0), "00:00");
}

#[test]
fn test_relative_preset_delegates() {
    let old = Instant::from(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());
    let text = format_date_time_in(
        &old,
        FormatPreset::Relative,
        Some(&Locale::EnglishUs),
        None,
        Zone::Utc,
    );
    assert!(text.ends_with("years ago"), "{text}");
}

// ── Custom fields ────────────────────────────────────────────────────────────

#[test]
fn test_custom_full_date_with_weekday() {
    let fields = FieldOptions {
        weekday: Some(TextStyle::Long),
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::Long),
        day: Some(NumericStyle::Numeric),
        ..FieldOptions::default()
    };
    assert_eq!(custom(fields, Locale::EnglishUs), "Wednesday, March 15, 2023");
    assert_eq!(custom(fields, Locale::German), "Mittwoch, 15. März 2023");
    assert_eq!(custom(fields, Locale::French), "mercredi 15 mars 2023");
}

#[test]
fn test_custom_two_digit_fields() {
    let fields = FieldOptions {
        year: Some(NumericStyle::Numeric),
        month: Some(MonthStyle::TwoDigit),
        day: Some(NumericStyle::TwoDigit),
        ..FieldOptions::default()
    };
    assert_eq!(custom(fields, Locale::EnglishUs), "03/15/2023");

    let clock = FieldOptions {
        hour: Some(NumericStyle::TwoDigit),
        minute: Some(NumericStyle::TwoDigit),
        second: Some(NumericStyle::TwoDigit),
        hour12: Some(false),
        ..FieldOptions::default()
    };
    assert_eq!(custom(clock, Locale::EnglishUs), "15:45:30");
}

#[test]
fn test_custom_hour_only_and_narrow_month() {
    let hour = FieldOptions {
        hour: Some(NumericStyle::Numeric),
        ..FieldOptions::default()
    };
    assert_eq!(custom(hour, Locale::German), "15 Uhr");
    assert_eq!(custom(hour, Locale::EnglishUs), "3 PM");

    let narrow = FieldOptions {
        month: Some(MonthStyle::Narrow),
        ..FieldOptions::default()
    };
    assert_eq!(custom(narrow, Locale::EnglishUs), "M");
}

#[test]
fn test_custom_without_fields_uses_date_bundle() {
    let text = format_date_time_in(
        &sample(),
        FormatPreset::Custom,
        Some(&Locale::EnglishUs),
        None,
        Zone::Utc,
    );
    assert_eq!(text, "Mar 15, 2023");
}

#[test]
fn test_custom_without_date_or_time_fields_renders_numeric_date() {
    assert_eq!(custom(FieldOptions::default(), Locale::EnglishUs), "3/15/2023");
    assert_eq!(
        custom(FieldOptions::default().with_time_zone(Zone::Utc), Locale::EnglishUs),
        "3/15/2023"
    );

    // The zone in an otherwise empty bundle still applies.
    let late = FieldOptions::default().with_time_zone("+09:00".parse().unwrap());
    assert_eq!(custom(late, Locale::EnglishUs), "3/16/2023");

    let clock_only = FieldOptions {
        hour12: Some(false),
        ..FieldOptions::default()
    };
    assert!(!clock_only.has_components());
    assert_eq!(custom(clock_only, Locale::EnglishUs), "3/15/2023");

    let fields: FieldOptions = serde_json::from_str(r#"{"timeZone":"utc"}"#).unwrap();
    assert_eq!(custom(fields, Locale::EnglishUs), "3/15/2023");
}

#[test]
fn test_calendar_presets_render_their_bundles() {
    let dt = Utc.timestamp_millis_opt(SAMPLE_MS).unwrap();
    for preset in FormatPreset::all() {
        let Some(bundle) = preset.field_options() else {
            continue;
        };
        let expected = format_fields(&dt, &bundle.with_time_zone(Zone::Utc), &Locale::EnglishGb);
        assert_eq!(fmt(*preset, Locale::EnglishGb), expected, "preset {preset}");
        assert!(!expected.is_empty(), "preset {preset}");
    }
}

#[test]
fn test_field_time_zone_overrides_call_zone() {
    let fields = FieldOptions::SHORT_TIME.with_time_zone("+02:00".parse().unwrap());
    assert_eq!(custom(fields, Locale::EnglishUs), "17:45");

    let dt = Utc.timestamp_millis_opt(SAMPLE_MS).unwrap();
    let fields = FieldOptions::SHORT_TIME.with_time_zone("-05:30".parse().unwrap());
    assert_eq!(format_fields(&dt, &fields, &Locale::EnglishUs), "10:15");
}

#[test]
fn test_field_options_from_json() {
    let json = r#"{"month":"long","day":"2-digit","timeZone":"utc"}"#;
    let fields: FieldOptions = serde_json::from_str(json).unwrap();
    assert_eq!(fields.month, Some(MonthStyle::Long));
    assert_eq!(fields.day, Some(NumericStyle::TwoDigit));
    assert_eq!(fields.time_zone, Some(Zone::Utc));
    assert_eq!(fields.year, None);
    assert_eq!(custom(fields, Locale::EnglishUs), "March 15");
}

// ── Invalid input ────────────────────────────────────────────────────────────

#[test]
fn test_invalid_instants_are_echoed() {
    let text = Instant::from("sometime soon");
    for preset in FormatPreset::all() {
        let out = format_date_time_in(&text, *preset, Some(&Locale::EnglishUs), None, Zone::Utc);
        assert_eq!(out, "sometime soon", "preset {preset}");
    }

    let nan = Instant::Millis(f64::NAN);
    assert_eq!(fmt_instant(&nan, FormatPreset::Date), "NaN");
    assert_eq!(fmt_instant(&Instant::Millis(f64::INFINITY), FormatPreset::Date), "Infinity");
}

fn fmt_instant(instant: &Instant, preset: FormatPreset) -> String {
    format_date_time_in(instant, preset, Some(&Locale::EnglishUs), None, Zone::Utc)
}

#[test]
fn test_text_instant_shapes() {
    for text in [
        "2023-03-15T15:45:30Z",
        "2023-03-15T17:45:30+02:00",
        "Wed, 15 Mar 2023 15:45:30 +0000",
    ] {
        assert_eq!(fmt_instant(&Instant::from(text), FormatPreset::ShortTime), "15:45", "{text}");
    }
    assert_eq!(fmt_instant(&Instant::from("2023-03-15"), FormatPreset::Date), "Mar 15, 2023");
}

// ── Preset and zone names ────────────────────────────────────────────────────

#[test]
fn test_preset_parsing() {
    assert_eq!("shortDate".parse::<FormatPreset>(), Ok(FormatPreset::ShortDate));
    assert_eq!("short-date".parse::<FormatPreset>(), Ok(FormatPreset::ShortDate));
    assert_eq!("YEAR_MONTH".parse::<FormatPreset>(), Ok(FormatPreset::YearMonth));
    assert_eq!(
        "bogus".parse::<FormatPreset>(),
        Err(Error::UnknownPreset("bogus".to_string()))
    );
    assert_eq!(FormatPreset::from_name_lenient("bogus"), FormatPreset::Datetime);
    assert_eq!(FormatPreset::default(), FormatPreset::Datetime);
}

#[test]
fn test_preset_names_round_trip_through_display() {
    for preset in FormatPreset::all() {
        assert_eq!(preset.to_string().parse::<FormatPreset>(), Ok(*preset));
    }
}

#[test]
fn test_only_calendar_presets_have_bundles() {
    assert_eq!(FormatPreset::Date.field_options(), Some(FieldOptions::DATE));
    assert_eq!(FormatPreset::Duration.field_options(), None);
    assert_eq!(FormatPreset::Relative.field_options(), None);
    assert_eq!(FormatPreset::Custom.field_options(), None);
}

#[test]
fn test_zone_parsing() {
    assert_eq!("utc".parse::<Zone>(), Ok(Zone::Utc));
    assert_eq!("Local".parse::<Zone>(), Ok(Zone::Local));
    assert_eq!("+02:00".parse::<Zone>().map(|z| z.to_string()), Ok("+02:00".to_string()));
    assert_eq!("-0530".parse::<Zone>().map(|z| z.to_string()), Ok("-05:30".to_string()));
    assert_eq!("+9".parse::<Zone>().map(|z| z.to_string()), Ok("+09:00".to_string()));
    assert!(matches!("mars".parse::<Zone>(), Err(Error::InvalidZone(_))));
    assert!("+25:00".parse::<Zone>().is_err());
}

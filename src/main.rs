// Entry point: loads config, sets locale and zone defaults, and runs one
// formatting command, printing the result to stdout.

use anyhow::Context;
use clap::{Parser, Subcommand};

use scilent::config::Config;
use scilent::format::{
    format_artist_names, format_date_time_in, format_duration, format_duration_human,
    format_relative_time_at, truncate_text, FieldOptions, FormatPreset, Instant,
    TruncationPolicy, Zone,
};
use scilent::locale::{self, Locale};
use scilent::logging;

#[derive(Parser)]
#[command(name = "scilent", about = "Format durations, timestamps and labels for music UIs")]
struct Cli {
    /// Locale for this run (e.g. en-GB, de, fr). Overrides the config file.
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a seconds count as MM:SS or HH:MM:SS
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
        /// Always include the hours field
        #[arg(long)]
        hours: bool,
        /// Compact form such as "2h 15m"
        #[arg(long, conflicts_with = "hours")]
        human: bool,
    },
    /// Describe an instant relative to now ("2 days ago")
    Relative {
        /// Epoch milliseconds or ISO-8601 text
        #[arg(allow_negative_numbers = true)]
        instant: Instant,
        /// Measure from this instant instead of the current time
        #[arg(long)]
        now: Option<Instant>,
    },
    /// Format an instant with a calendar preset
    Datetime {
        #[arg(allow_negative_numbers = true)]
        instant: Instant,
        #[arg(long, default_value = "datetime")]
        preset: FormatPreset,
        /// Field options as JSON, e.g. '{"month":"long","day":"numeric"}'
        #[arg(long)]
        fields: Option<String>,
        /// local, utc or an offset like +02:00
        #[arg(long)]
        zone: Option<Zone>,
    },
    /// Shorten text to a character budget
    Truncate {
        text: String,
        /// Maximum characters (defaults to the configured budget)
        #[arg(long)]
        max: Option<usize>,
        #[arg(long)]
        policy: Option<TruncationPolicy>,
    },
    /// Join artist names
    Artists {
        #[arg(required = true)]
        names: Vec<String>,
        #[arg(long, default_value = ", ")]
        delimiter: String,
    },
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    let locale = cli.locale.as_deref().map(Locale::parse);
    let locale = locale.as_ref();

    let output = match cli.command {
        Command::Duration { seconds, human: true, .. } => format_duration_human(seconds),
        Command::Duration { seconds, hours, .. } => format_duration(seconds, hours),
        Command::Relative { instant, now } => {
            let now = match now {
                Some(now) => now
                    .resolve()
                    .with_context(|| format!("invalid --now instant: {now}"))?,
                None => chrono::Utc::now(),
            };
            format_relative_time_at(&instant, now, locale)
        }
        Command::Datetime {
            instant,
            preset,
            fields,
            zone,
        } => {
            let fields = fields
                .map(|json| serde_json::from_str::<FieldOptions>(&json))
                .transpose()
                .context("invalid --fields JSON")?;
            // `--fields` alone switches the default preset to custom.
            let preset = match (preset, fields.is_some()) {
                (FormatPreset::Datetime, true) => FormatPreset::Custom,
                (FormatPreset::Custom, _) | (_, false) => preset,
                (other, true) => {
                    anyhow::bail!("--fields only applies to the custom preset, not {other}")
                }
            };
            let zone = zone.unwrap_or(config.timestamp.time_zone);
            format_date_time_in(&instant, preset, locale, fields.as_ref(), zone)
        }
        Command::Truncate { text, max, policy } => truncate_text(
            &text,
            max.unwrap_or(config.truncation.max_length),
            policy.unwrap_or(config.truncation.policy),
        ),
        Command::Artists { names, delimiter } => format_artist_names(names, &delimiter),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_default();
    logging::init(&config)?;
    config.apply();
    tracing::debug!("running with default locale {}", locale::default_locale());

    let output = run(cli, &config)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("scilent").chain(args.iter().copied()))?;
        run(cli, &Config::default())
    }

    // ── Datetime ─────────────────────────────────────────────────────────────

    #[test]
    fn test_fields_switch_default_preset_to_custom() {
        let out = run_args(&[
            "--locale",
            "en-US",
            "datetime",
            "1678895130000",
            "--zone",
            "utc",
            "--fields",
            r#"{"month":"long","day":"numeric"}"#,
        ])
        .unwrap();
        assert_eq!(out, "March 15");
    }

    #[test]
    fn test_explicit_preset_without_fields() {
        let out = run_args(&[
            "--locale",
            "en-US",
            "datetime",
            "1678895130000",
            "--zone",
            "utc",
            "--preset",
            "short-date",
        ])
        .unwrap();
        assert_eq!(out, "3/15/23");
    }

    #[test]
    fn test_fields_with_other_presets_are_rejected() {
        for preset in ["date", "weekday", "relative", "duration"] {
            let result = run_args(&[
                "datetime",
                "1678895130000",
                "--preset",
                preset,
                "--fields",
                r#"{"year":"numeric"}"#,
            ]);
            assert!(result.is_err(), "preset {preset}");
        }
    }

    #[test]
    fn test_bad_fields_json_is_an_error() {
        assert!(run_args(&["datetime", "0", "--fields", "{month"]).is_err());
    }

    // ── Other commands ───────────────────────────────────────────────────────

    #[test]
    fn test_duration_and_text_commands() {
        assert_eq!(run_args(&["duration", "7205", "--human"]).unwrap(), "2h 0m 5s");
        assert_eq!(run_args(&["duration", "65", "--hours"]).unwrap(), "00:01:05");
        assert_eq!(run_args(&["truncate", "abcdefghij", "--max", "5"]).unwrap(), "abcd…");
        assert_eq!(
            run_args(&["artists", "Daft Punk", " ", "Pharrell"]).unwrap(),
            "Daft Punk, Pharrell"
        );
    }

    #[test]
    fn test_relative_with_fixed_now() {
        let out = run_args(&[
            "--locale",
            "en-US",
            "relative",
            "2024-03-13T12:00:00Z",
            "--now",
            "2024-03-15T12:00:00Z",
        ])
        .unwrap();
        assert_eq!(out, "2 days ago");
    }
}

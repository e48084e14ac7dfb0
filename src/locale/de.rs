// German wording. Relative phrases take the dative plural ("vor 2 Tagen").

use super::{join_present, with_weekday, Affix, RelativeRules, Rules, UnitWords};
use crate::format::calendar::DateParts;
use crate::format::relative::RelativeUnit;

pub(crate) static RULES: Rules = Rules {
    months_long: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays_long: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
    weekdays_short: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    hour12: false,
    am: "AM",
    pm: "PM",
    hour_suffix: " Uhr",
    pad_numeric_date: false,
    datetime_separator: ", ",
    compose_date,
    relative: RelativeRules {
        past: Affix { prefix: "vor ", suffix: "" },
        future: Affix { prefix: "in ", suffix: "" },
        units: [
            UnitWords { one: "Sekunde", other: "Sekunden" },
            UnitWords { one: "Minute", other: "Minuten" },
            UnitWords { one: "Stunde", other: "Stunden" },
            UnitWords { one: "Tag", other: "Tagen" },
            UnitWords { one: "Monat", other: "Monaten" },
            UnitWords { one: "Jahr", other: "Jahren" },
        ],
        is_one,
        auto_word,
    },
};

fn is_one(n: u64) -> bool {
    n == 1
}

fn auto_word(unit: RelativeUnit, value: i64) -> Option<&'static str> {
    match (unit, value) {
        (RelativeUnit::Second, 0) => Some("jetzt"),
        (RelativeUnit::Minute, 0) => Some("in dieser Minute"),
        (RelativeUnit::Hour, 0) => Some("in dieser Stunde"),
        (RelativeUnit::Day, -2) => Some("vorgestern"),
        (RelativeUnit::Day, -1) => Some("gestern"),
        (RelativeUnit::Day, 0) => Some("heute"),
        (RelativeUnit::Day, 1) => Some("morgen"),
        (RelativeUnit::Day, 2) => Some("übermorgen"),
        (RelativeUnit::Month, -1) => Some("letzten Monat"),
        (RelativeUnit::Month, 0) => Some("diesen Monat"),
        (RelativeUnit::Month, 1) => Some("nächsten Monat"),
        (RelativeUnit::Year, -1) => Some("letztes Jahr"),
        (RelativeUnit::Year, 0) => Some("dieses Jahr"),
        (RelativeUnit::Year, 1) => Some("nächstes Jahr"),
        _ => None,
    }
}

// "15. März 2023", "15.3.23", "15.3."
fn compose_date(p: &DateParts) -> String {
    let date = if p.month_is_text {
        let day = p.day().map(|d| format!("{d}."));
        join_present(&[day.as_deref(), p.month(), p.year()], " ")
    } else {
        let date = join_present(&[p.day(), p.month(), p.year()], ".");
        if p.year().is_none() && !date.is_empty() {
            format!("{date}.")
        } else {
            date
        }
    };
    with_weekday(p.weekday(), date, ", ")
}

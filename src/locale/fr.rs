// French wording. Zero and one both take the singular.

use super::{join_present, with_weekday, Affix, RelativeRules, Rules, UnitWords};
use crate::format::calendar::DateParts;
use crate::format::relative::RelativeUnit;

pub(crate) static RULES: Rules = Rules {
    months_long: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
        "nov.", "déc.",
    ],
    weekdays_long: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekdays_short: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    hour12: false,
    am: "AM",
    pm: "PM",
    hour_suffix: " h",
    pad_numeric_date: true,
    datetime_separator: " ",
    compose_date,
    relative: RelativeRules {
        past: Affix { prefix: "il y a ", suffix: "" },
        future: Affix { prefix: "dans ", suffix: "" },
        units: [
            UnitWords { one: "seconde", other: "secondes" },
            UnitWords { one: "minute", other: "minutes" },
            UnitWords { one: "heure", other: "heures" },
            UnitWords { one: "jour", other: "jours" },
            UnitWords { one: "mois", other: "mois" },
            UnitWords { one: "an", other: "ans" },
        ],
        is_one,
        auto_word,
    },
};

fn is_one(n: u64) -> bool {
    n < 2
}

fn auto_word(unit: RelativeUnit, value: i64) -> Option<&'static str> {
    match (unit, value) {
        (RelativeUnit::Second, 0) => Some("maintenant"),
        (RelativeUnit::Minute, 0) => Some("cette minute-ci"),
        (RelativeUnit::Hour, 0) => Some("cette heure-ci"),
        (RelativeUnit::Day, -2) => Some("avant-hier"),
        (RelativeUnit::Day, -1) => Some("hier"),
        (RelativeUnit::Day, 0) => Some("aujourd’hui"),
        (RelativeUnit::Day, 1) => Some("demain"),
        (RelativeUnit::Day, 2) => Some("après-demain"),
        (RelativeUnit::Month, -1) => Some("le mois dernier"),
        (RelativeUnit::Month, 0) => Some("ce mois-ci"),
        (RelativeUnit::Month, 1) => Some("le mois prochain"),
        (RelativeUnit::Year, -1) => Some("l’année dernière"),
        (RelativeUnit::Year, 0) => Some("cette année"),
        (RelativeUnit::Year, 1) => Some("l’année prochaine"),
        _ => None,
    }
}

// "mercredi 15 mars 2023", "15/03/2023"
fn compose_date(p: &DateParts) -> String {
    let sep = if p.month_is_text { " " } else { "/" };
    let date = join_present(&[p.day(), p.month(), p.year()], sep);
    with_weekday(p.weekday(), date, " ")
}

// Spanish wording. Long month names are linked with "de" ("15 de marzo de 2023").

use super::{join_present, with_weekday, Affix, RelativeRules, Rules, UnitWords};
use crate::format::calendar::DateParts;
use crate::format::relative::RelativeUnit;

pub(crate) static RULES: Rules = Rules {
    months_long: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays_long: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
    weekdays_short: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    hour12: false,
    am: "a. m.",
    pm: "p. m.",
    hour_suffix: "",
    pad_numeric_date: false,
    datetime_separator: ", ",
    compose_date,
    relative: RelativeRules {
        past: Affix { prefix: "hace ", suffix: "" },
        future: Affix { prefix: "dentro de ", suffix: "" },
        units: [
            UnitWords { one: "segundo", other: "segundos" },
            UnitWords { one: "minuto", other: "minutos" },
            UnitWords { one: "hora", other: "horas" },
            UnitWords { one: "día", other: "días" },
            UnitWords { one: "mes", other: "meses" },
            UnitWords { one: "año", other: "años" },
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
        (RelativeUnit::Second, 0) => Some("ahora"),
        (RelativeUnit::Minute, 0) => Some("este minuto"),
        (RelativeUnit::Hour, 0) => Some("esta hora"),
        (RelativeUnit::Day, -2) => Some("anteayer"),
        (RelativeUnit::Day, -1) => Some("ayer"),
        (RelativeUnit::Day, 0) => Some("hoy"),
        (RelativeUnit::Day, 1) => Some("mañana"),
        (RelativeUnit::Day, 2) => Some("pasado mañana"),
        (RelativeUnit::Month, -1) => Some("el mes pasado"),
        (RelativeUnit::Month, 0) => Some("este mes"),
        (RelativeUnit::Month, 1) => Some("el próximo mes"),
        (RelativeUnit::Year, -1) => Some("el año pasado"),
        (RelativeUnit::Year, 0) => Some("este año"),
        (RelativeUnit::Year, 1) => Some("el próximo año"),
        _ => None,
    }
}

// "15 de marzo de 2023", "15 mar 2023", "15/3/23"
fn compose_date(p: &DateParts) -> String {
    let date = if p.month_is_text {
        let sep = if p.month_is_long { " de " } else { " " };
        join_present(&[p.day(), p.month(), p.year()], sep)
    } else {
        join_present(&[p.day(), p.month(), p.year()], "/")
    };
    with_weekday(p.weekday(), date, ", ")
}

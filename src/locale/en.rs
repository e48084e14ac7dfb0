// English wording. US and UK share vocabulary and differ in field order and clock.

use super::{join_present, with_weekday, Affix, RelativeRules, Rules, UnitWords};
use crate::format::calendar::DateParts;
use crate::format::relative::RelativeUnit;

const MONTHS_LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS_LONG: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const RELATIVE: RelativeRules = RelativeRules {
    past: Affix { prefix: "", suffix: " ago" },
    future: Affix { prefix: "in ", suffix: "" },
    units: [
        UnitWords { one: "second", other: "seconds" },
        UnitWords { one: "minute", other: "minutes" },
        UnitWords { one: "hour", other: "hours" },
        UnitWords { one: "day", other: "days" },
        UnitWords { one: "month", other: "months" },
        UnitWords { one: "year", other: "years" },
    ],
    is_one,
    auto_word,
};

pub(crate) static US: Rules = Rules {
    months_long: MONTHS_LONG,
    months_short: MONTHS_SHORT,
    weekdays_long: WEEKDAYS_LONG,
    weekdays_short: WEEKDAYS_SHORT,
    hour12: true,
    am: "AM",
    pm: "PM",
    hour_suffix: "",
    pad_numeric_date: false,
    datetime_separator: ", ",
    compose_date: compose_us,
    relative: RELATIVE,
};

pub(crate) static GB: Rules = Rules {
    months_long: MONTHS_LONG,
    months_short: MONTHS_SHORT,
    weekdays_long: WEEKDAYS_LONG,
    weekdays_short: WEEKDAYS_SHORT,
    hour12: false,
    am: "am",
    pm: "pm",
    hour_suffix: "",
    pad_numeric_date: true,
    datetime_separator: ", ",
    compose_date: compose_gb,
    relative: RELATIVE,
};

fn is_one(n: u64) -> bool {
    n == 1
}

fn auto_word(unit: RelativeUnit, value: i64) -> Option<&'static str> {
    match (unit, value) {
        (RelativeUnit::Second, 0) => Some("now"),
        (RelativeUnit::Minute, 0) => Some("this minute"),
        (RelativeUnit::Hour, 0) => Some("this hour"),
        (RelativeUnit::Day, -1) => Some("yesterday"),
        (RelativeUnit::Day, 0) => Some("today"),
        (RelativeUnit::Day, 1) => Some("tomorrow"),
        (RelativeUnit::Month, -1) => Some("last month"),
        (RelativeUnit::Month, 0) => Some("this month"),
        (RelativeUnit::Month, 1) => Some("next month"),
        (RelativeUnit::Year, -1) => Some("last year"),
        (RelativeUnit::Year, 0) => Some("this year"),
        (RelativeUnit::Year, 1) => Some("next year"),
        _ => None,
    }
}

// "March 15, 2023", "3/15/23"
fn compose_us(p: &DateParts) -> String {
    let date = if p.month_is_text {
        match (p.month(), p.day(), p.year()) {
            (Some(m), Some(d), Some(y)) => format!("{m} {d}, {y}"),
            (m, d, y) => join_present(&[m, d, y], " "),
        }
    } else {
        join_present(&[p.month(), p.day(), p.year()], "/")
    };
    with_weekday(p.weekday(), date, ", ")
}

// "15 March 2023", "15/03/2023"
fn compose_gb(p: &DateParts) -> String {
    let date = if p.month_is_text {
        join_present(&[p.day(), p.month(), p.year()], " ")
    } else {
        join_present(&[p.day(), p.month(), p.year()], "/")
    };
    with_weekday(p.weekday(), date, ", ")
}

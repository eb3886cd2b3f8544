//! Spoken-French rendering of dates and times
//!
//! Projects a due timestamp back into the phrases a voice confirmation
//! uses, the inverse direction of the utterance parser.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// French weekday names, Sunday-indexed.
pub const WEEKDAYS: [&str; 7] =
    ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"];

/// French month names, January-indexed.
pub const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Long form shown in reminder lists, e.g. "lundi 1 janvier à 10:00".
pub fn long_date(at: NaiveDateTime) -> String {
    format!(
        "{} {} {} à {:02}:{:02}",
        WEEKDAYS[at.weekday().num_days_from_sunday() as usize],
        at.day(),
        MONTHS[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

/// Render a time as a spoken phrase: "10 heures" or "10 heures 30".
/// No zero-padding; the minutes component is omitted entirely at the
/// full hour.
pub fn spoken_time(at: NaiveDateTime) -> String {
    let hours = at.hour();
    let minutes = at.minute();

    if minutes == 0 {
        format!("{} heures", hours)
    } else {
        format!("{} heures {}", hours, minutes)
    }
}

/// Render a date as a spoken phrase relative to `now`.
///
/// "aujourd'hui", "demain" and "après-demain" cover the first three
/// days; anything further is spoken as a bare weekday name, so a date
/// nine days out sounds the same as one two days out on the same
/// weekday.
pub fn spoken_date(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff_days = (date.date() - now.date()).num_days();

    match diff_days {
        0 => "aujourd'hui".to_string(),
        1 => "demain".to_string(),
        2 => "après-demain".to_string(),
        _ => WEEKDAYS[date.weekday().num_days_from_sunday() as usize].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn monday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn full_hour_has_no_minutes_component() {
        assert_eq!(spoken_time(monday_morning()), "8 heures");
    }

    #[test]
    fn minutes_are_spoken_without_padding() {
        let at = monday_morning() + Duration::minutes(5);
        assert_eq!(spoken_time(at), "8 heures 5");
    }

    #[test_case(0, "aujourd'hui" ; "today")]
    #[test_case(1, "demain" ; "tomorrow")]
    #[test_case(2, "après-demain" ; "day after tomorrow")]
    #[test_case(3, "jeudi" ; "three days out is a weekday name")]
    #[test_case(9, "mercredi" ; "beyond a week falls back to the weekday name")]
    fn relative_dates(days: i64, expected: &str) {
        let now = monday_morning();
        assert_eq!(spoken_date(now + Duration::days(days), now), expected);
    }

    #[test]
    fn long_date_spells_out_the_day() {
        assert_eq!(long_date(monday_morning()), "lundi 1 janvier à 08:00");
    }

    #[test]
    fn same_weekday_two_weeks_out_sounds_identical() {
        let now = monday_morning();
        let near = now + Duration::days(4);
        let far = now + Duration::days(11);
        assert_eq!(spoken_date(near, now), spoken_date(far, now));
    }
}

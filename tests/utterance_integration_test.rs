// Integration test for the utterance-to-confirmation round trip
use chrono::{NaiveDate, NaiveDateTime};
use rappel::{parse, spoken_date, spoken_time};

/// Monday 2024-01-01 08:00.
fn monday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap()
}

#[test]
fn test_parse_and_speak_round_trip() {
    let now = monday_morning();

    let parsed = parse("Rappelle-moi la pharmacie demain à 10h", now);
    assert_eq!(parsed.text, "Pharmacie");
    assert_eq!(spoken_date(parsed.due_at, now), "demain");
    assert_eq!(spoken_time(parsed.due_at), "10 heures");

    let parsed = parse("Appeler Marie vendredi à 14h", now);
    assert_eq!(parsed.text, "Appeler Marie");
    assert_eq!(spoken_date(parsed.due_at, now), "vendredi");
    assert_eq!(spoken_time(parsed.due_at), "14 heures");

    // A half-hour time keeps its minutes through the round trip.
    let parsed = parse("Prendre les médicaments à 8h30", now);
    assert_eq!(spoken_date(parsed.due_at, now), "aujourd'hui");
    assert_eq!(spoken_time(parsed.due_at), "8 heures 30");
}

#[test]
fn test_rollover_speaks_as_tomorrow() {
    let now = monday_morning();

    // 7:00 has already passed at 8:00, so the reminder lands tomorrow.
    let parsed = parse("Prendre la tension à 7h", now);
    assert_eq!(spoken_date(parsed.due_at, now), "demain");
    assert_eq!(spoken_time(parsed.due_at), "7 heures");
}

#[test]
fn test_weekday_beyond_two_days_is_spoken_as_weekday_name() {
    let now = monday_morning();

    let parsed = parse("dans 6 jours appeler le médecin", now);
    assert_eq!(parsed.text, "Appeler médecin");
    // Sunday 2024-01-07, spoken as the bare weekday name.
    assert_eq!(spoken_date(parsed.due_at, now), "dimanche");
    assert_eq!(spoken_time(parsed.due_at), "9 heures");
}

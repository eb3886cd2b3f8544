//! Utterance parsing for French reminder requests
//!
//! Converts a spoken or typed sentence like "Rappelle-moi la pharmacie
//! demain à 10h" into a cleaned subject and an absolute due timestamp.
//! Parsing is pure: the caller supplies the reference instant, nothing
//! here reads the wall clock.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Hour used when the utterance carries no time expression.
const DEFAULT_HOUR: i64 = 9;

/// Structured result of parsing one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReminder {
    /// Cleaned subject, first letter capitalized, filler words removed.
    pub text: String,
    /// Absolute due timestamp at whole-minute resolution.
    pub due_at: NaiveDateTime,
}

/// Time patterns, tried in order; the first match wins.
/// "10h30", "à 10h", "10:30" then "10 heures", "10 heures 30".
static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:à\s*)?(\d{1,2})\s*[h:]\s*(\d{2})?").unwrap(),
        Regex::new(r"(?i)(?:à\s*)?(\d{1,2})\s*heures?\s*(\d{2})?").unwrap(),
    ]
});

/// How a matched date phrase translates into a day offset.
#[derive(Debug, Clone, Copy)]
enum DateRule {
    /// Fixed number of days from today ("demain", "après-demain").
    Fixed(i64),
    /// "dans N jours", N captured from the match.
    InDays,
    /// Next occurrence of a weekday, Sunday = 0.
    Weekday(u32),
}

/// Date patterns, tried in order; the first match wins.
static DATE_PATTERNS: Lazy<Vec<(Regex, DateRule)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)demain").unwrap(), DateRule::Fixed(1)),
        (Regex::new(r"(?i)après[- ]?demain").unwrap(), DateRule::Fixed(2)),
        (Regex::new(r"(?i)dans\s*(\d+)\s*jours?").unwrap(), DateRule::InDays),
        (Regex::new(r"(?i)lundi").unwrap(), DateRule::Weekday(1)),
        (Regex::new(r"(?i)mardi").unwrap(), DateRule::Weekday(2)),
        (Regex::new(r"(?i)mercredi").unwrap(), DateRule::Weekday(3)),
        (Regex::new(r"(?i)jeudi").unwrap(), DateRule::Weekday(4)),
        (Regex::new(r"(?i)vendredi").unwrap(), DateRule::Weekday(5)),
        (Regex::new(r"(?i)samedi").unwrap(), DateRule::Weekday(6)),
        (Regex::new(r"(?i)dimanche").unwrap(), DateRule::Weekday(0)),
    ]
});

/// Filler expressions stripped from the subject after date/time removal.
static FILLER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)rappelle[- ]?moi").unwrap(),
        Regex::new(r"(?i)rappeler").unwrap(),
        Regex::new(r"(?i)\b(?:de|le|la)\s+").unwrap(),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A recognized time expression and the span it occupies in the text.
#[derive(Debug)]
struct TimeToken {
    hours: i64,
    minutes: i64,
    span: (usize, usize),
}

/// A recognized date phrase and the span it occupies in the text.
#[derive(Debug)]
struct DateToken {
    days_to_add: i64,
    span: (usize, usize),
}

/// Parse a French reminder utterance against a reference instant.
///
/// Never fails: without a recognizable time the reminder defaults to
/// 09:00, and without a date phrase it lands today, or tomorrow when the
/// computed time has already passed (the rollover rule). The caller is
/// responsible for rejecting subjects that end up too short to be useful.
pub fn parse(input: &str, now: NaiveDateTime) -> ParsedReminder {
    let mut working = input.trim().to_string();

    let time = extract_time(&working);
    let (hours, minutes) = match &time {
        Some(t) => (t.hours, t.minutes),
        None => (DEFAULT_HOUR, 0),
    };
    if let Some(t) = &time {
        debug!("Matched time {:02}:{:02} in '{}'", t.hours, t.minutes, input);
        working.replace_range(t.span.0..t.span.1, "");
    }

    let date = extract_date(&working, now);
    if let Some(d) = &date {
        working.replace_range(d.span.0..d.span.1, "");
    }

    let days_to_add = match &date {
        Some(d) => d.days_to_add,
        None => {
            // No date phrase: if the time has already passed today, the
            // reminder rolls over to tomorrow.
            let today_at = start_of_day(now)
                + Duration::hours(hours)
                + Duration::minutes(minutes);
            if today_at <= now {
                1
            } else {
                0
            }
        }
    };

    let due_at = start_of_day(now)
        + Duration::days(days_to_add)
        + Duration::hours(hours)
        + Duration::minutes(minutes);

    let text = clean_subject(&working);
    debug!("Parsed utterance into '{}' due {}", text, due_at);

    ParsedReminder { text, due_at }
}

/// Days from `now` until the next occurrence of `target` (Sunday = 0).
/// Today never matches itself: the result is always 1..=7.
fn days_until_weekday(target: u32, now: NaiveDateTime) -> i64 {
    let current = now.weekday().num_days_from_sunday() as i64;
    let mut days_until = target as i64 - current;
    if days_until <= 0 {
        days_until += 7;
    }
    days_until
}

fn extract_time(text: &str) -> Option<TimeToken> {
    for pattern in TIME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let (whole, hour) = (caps.get(0)?, caps.get(1)?);
            let hours = hour.as_str().parse().unwrap_or(0);
            let minutes = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
            return Some(TimeToken { hours, minutes, span: (whole.start(), whole.end()) });
        }
    }
    None
}

fn extract_date(text: &str, now: NaiveDateTime) -> Option<DateToken> {
    for (pattern, rule) in DATE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let whole = caps.get(0)?;
            let days_to_add = match rule {
                DateRule::Fixed(days) => *days,
                DateRule::InDays => {
                    caps.get(1).map_or(0, |m| m.as_str().parse().unwrap_or(0))
                }
                DateRule::Weekday(day) => days_until_weekday(*day, now),
            };
            return Some(DateToken { days_to_add, span: (whole.start(), whole.end()) });
        }
    }
    None
}

/// Strip filler words, collapse whitespace and capitalize the remainder.
fn clean_subject(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in FILLER_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    capitalize(cleaned.trim())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn start_of_day(at: NaiveDateTime) -> NaiveDateTime {
    at.date().and_time(NaiveTime::MIN)
}

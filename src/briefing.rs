//! Morning briefing phrase builder.
//!
//! Builds the spoken day summary read to the senior: the date, how many
//! reminders are scheduled today and one clause per reminder.

use chrono::{Datelike, NaiveDateTime};

use crate::parser::speech::{spoken_time, MONTHS, WEEKDAYS};
use crate::reminder::Reminder;

/// Build the spoken summary for the reminders due today.
///
/// `reminders` is expected to already be filtered to the current day and
/// ordered by due time, the way the store hands them out.
pub fn morning_briefing(reminders: &[Reminder], now: NaiveDateTime) -> String {
    let date = now.date();
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize];

    let mut text = format!("Bonjour ! Nous sommes {} {} {}. ", weekday, date.day(), month);

    if reminders.is_empty() {
        text.push_str(
            "Vous n'avez aucun rendez-vous prévu aujourd'hui. Profitez de votre journée !",
        );
        return text;
    }

    let plural = if reminders.len() > 1 { "s" } else { "" };
    text.push_str(&format!("Vous avez {} rappel{} aujourd'hui. ", reminders.len(), plural));

    for (index, reminder) in reminders.iter().enumerate() {
        let time = spoken_time(reminder.due_at);
        if index == reminders.len() - 1 && index > 0 {
            text.push_str(&format!("Et à {}, {}. ", time, reminder.text));
        } else {
            text.push_str(&format!("À {}, {}. ", time, reminder.text));
        }
    }

    text.push_str("Passez une excellente journée !");
    text
}

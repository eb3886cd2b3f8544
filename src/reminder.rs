//! Reminder domain model and the store seam.
//!
//! A reminder belongs to a family circle and is created by one of its
//! members. Persistence itself lives behind [`ReminderStore`]; the
//! in-process [`MemoryStore`] backs the terminal session and tests.

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minutes a reminder is pushed back when snoozed.
pub const SNOOZE_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Done,
    Snoozed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub text: String,
    pub due_at: NaiveDateTime,
    pub status: ReminderStatus,
    pub circle_id: Uuid,
    pub created_by: Uuid,
}

impl Reminder {
    pub fn new(text: String, due_at: NaiveDateTime, circle_id: Uuid, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            due_at,
            status: ReminderStatus::Pending,
            circle_id,
            created_by,
        }
    }

    pub fn complete(&mut self) {
        self.status = ReminderStatus::Done;
    }

    /// Push the reminder back by [`SNOOZE_MINUTES`].
    pub fn snooze(&mut self) {
        self.due_at += Duration::minutes(SNOOZE_MINUTES);
        self.status = ReminderStatus::Snoozed;
    }

    /// Open reminders are the ones still waiting to fire.
    pub fn is_open(&self) -> bool {
        matches!(self.status, ReminderStatus::Pending | ReminderStatus::Snoozed)
    }
}

/// Consumed interface of the reminder backend.
///
/// The real store is an external service owned by the surrounding
/// application; this trait is the shape the assistant talks to.
pub trait ReminderStore {
    fn insert(&mut self, reminder: Reminder) -> Result<()>;
    fn update(&mut self, reminder: &Reminder) -> Result<()>;
    fn get(&self, id: Uuid) -> Option<Reminder>;
    /// Pending and snoozed reminders, soonest first.
    fn open_reminders(&self) -> Vec<Reminder>;
    /// Open reminders due on the given calendar day, soonest first.
    fn due_on(&self, date: NaiveDate) -> Vec<Reminder>;
}

/// In-process store used by the terminal session and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<Reminder>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReminderStore for MemoryStore {
    fn insert(&mut self, reminder: Reminder) -> Result<()> {
        self.items.push(reminder);
        Ok(())
    }

    fn update(&mut self, reminder: &Reminder) -> Result<()> {
        if let Some(existing) = self.items.iter_mut().find(|r| r.id == reminder.id) {
            *existing = reminder.clone();
        }
        Ok(())
    }

    fn get(&self, id: Uuid) -> Option<Reminder> {
        self.items.iter().find(|r| r.id == id).cloned()
    }

    fn open_reminders(&self) -> Vec<Reminder> {
        let mut open: Vec<Reminder> =
            self.items.iter().filter(|r| r.is_open()).cloned().collect();
        open.sort_by_key(|r| r.due_at);
        open
    }

    fn due_on(&self, date: NaiveDate) -> Vec<Reminder> {
        let mut due: Vec<Reminder> = self
            .items
            .iter()
            .filter(|r| r.is_open() && r.due_at.date() == date)
            .cloned()
            .collect();
        due.sort_by_key(|r| r.due_at);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn reminder(text: &str, due_at: NaiveDateTime) -> Reminder {
        Reminder::new(text.to_string(), due_at, Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn new_reminder_starts_pending() {
        let r = reminder("Pharmacie", at(2, 10));
        assert_eq!(r.status, ReminderStatus::Pending);
        assert!(r.is_open());
    }

    #[test]
    fn complete_closes_the_reminder() {
        let mut r = reminder("Pharmacie", at(2, 10));
        r.complete();
        assert_eq!(r.status, ReminderStatus::Done);
        assert!(!r.is_open());
    }

    #[test]
    fn snooze_pushes_back_half_an_hour() {
        let mut r = reminder("Pharmacie", at(2, 10));
        r.snooze();
        assert_eq!(r.status, ReminderStatus::Snoozed);
        assert_eq!(r.due_at, at(2, 10) + Duration::minutes(30));
        assert!(r.is_open());
    }

    #[test]
    fn open_reminders_are_sorted_by_due_date() -> Result<()> {
        let mut store = MemoryStore::new();
        store.insert(reminder("Médecin", at(3, 9)))?;
        store.insert(reminder("Pharmacie", at(2, 10)))?;
        let mut done = reminder("Courses", at(1, 8));
        done.complete();
        store.insert(done)?;

        let open = store.open_reminders();
        let texts: Vec<&str> = open.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Pharmacie", "Médecin"]);
        Ok(())
    }

    #[test]
    fn due_on_filters_to_a_single_day() -> Result<()> {
        let mut store = MemoryStore::new();
        store.insert(reminder("Pharmacie", at(2, 10)))?;
        store.insert(reminder("Kiné", at(2, 15)))?;
        store.insert(reminder("Médecin", at(3, 9)))?;

        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let due = store.due_on(day);
        let texts: Vec<&str> = due.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Pharmacie", "Kiné"]);
        Ok(())
    }

    #[test]
    fn update_replaces_the_stored_copy() -> Result<()> {
        let mut store = MemoryStore::new();
        let mut r = reminder("Pharmacie", at(2, 10));
        store.insert(r.clone())?;

        r.snooze();
        store.update(&r)?;

        let stored = store.get(r.id).expect("reminder should exist");
        assert_eq!(stored.status, ReminderStatus::Snoozed);
        Ok(())
    }

    #[test]
    fn reminder_round_trips_through_json() -> Result<()> {
        let r = reminder("Appeler Marie", at(5, 14));
        let json = serde_json::to_string(&r)?;
        assert!(json.contains("\"pending\""));
        let back: Reminder = serde_json::from_str(&json)?;
        assert_eq!(back.id, r.id);
        assert_eq!(back.text, r.text);
        assert_eq!(back.due_at, r.due_at);
        Ok(())
    }
}

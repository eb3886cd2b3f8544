//! Reminder-creation flow.
//!
//! Wires one finalized transcript through the parser, the reminder
//! store and the speech sink: parse, reject unusable subjects, persist,
//! then voice a French confirmation.

use chrono::NaiveDateTime;
use log::{debug, info};
use thiserror::Error;
use uuid::Uuid;

use crate::briefing::morning_briefing;
use crate::parser::{parse, spoken_date, spoken_time};
use crate::reminder::{Reminder, ReminderStore, SNOOZE_MINUTES};
use crate::voice::{Feedback, SpeechSink};

/// Cleaned subjects shorter than this are treated as "not understood".
pub const MIN_SUBJECT_LEN: usize = 2;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// The cleaned subject was too short to be a usable reminder.
    #[error("utterance was not understood")]
    NotUnderstood,
    #[error("no reminder with id {0}")]
    UnknownReminder(Uuid),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub struct Assistant {
    store: Box<dyn ReminderStore>,
    voice: Box<dyn SpeechSink>,
    circle_id: Uuid,
    user_id: Uuid,
}

impl Assistant {
    pub fn new(
        store: Box<dyn ReminderStore>,
        voice: Box<dyn SpeechSink>,
        circle_id: Uuid,
        user_id: Uuid,
    ) -> Self {
        Self { store, voice, circle_id, user_id }
    }

    /// Turn a finalized transcript into a stored reminder.
    ///
    /// `now` is captured once by the caller and threaded through parsing
    /// and confirmation so the whole exchange sees a single instant.
    pub fn create_from_utterance(
        &mut self,
        transcript: &str,
        now: NaiveDateTime,
    ) -> Result<Reminder, AssistantError> {
        debug!("Transcript: '{}'", transcript);
        let parsed = parse(transcript, now);

        if parsed.text.chars().count() < MIN_SUBJECT_LEN {
            return Err(AssistantError::NotUnderstood);
        }

        let reminder =
            Reminder::new(parsed.text, parsed.due_at, self.circle_id, self.user_id);
        self.store.insert(reminder.clone())?;
        info!("Created reminder '{}' due {}", reminder.text, reminder.due_at);

        self.voice.speak(&confirmation(&reminder, now));
        Ok(reminder)
    }

    pub fn complete(&mut self, id: Uuid) -> Result<(), AssistantError> {
        let mut reminder =
            self.store.get(id).ok_or(AssistantError::UnknownReminder(id))?;
        reminder.complete();
        self.store.update(&reminder)?;
        self.voice.speak(Feedback::ReminderDone.phrase());
        Ok(())
    }

    pub fn snooze(&mut self, id: Uuid) -> Result<(), AssistantError> {
        let mut reminder =
            self.store.get(id).ok_or(AssistantError::UnknownReminder(id))?;
        reminder.snooze();
        self.store.update(&reminder)?;
        self.voice
            .speak(&format!("Rappel reporté de {} minutes", SNOOZE_MINUTES));
        Ok(())
    }

    pub fn open_reminders(&self) -> Vec<Reminder> {
        self.store.open_reminders()
    }

    /// Spoken summary of the reminders due today.
    pub fn briefing(&self, now: NaiveDateTime) -> String {
        morning_briefing(&self.store.due_on(now.date()), now)
    }
}

/// "C'est noté. Je vous rappellerai {text} {date} à {time}."
fn confirmation(reminder: &Reminder, now: NaiveDateTime) -> String {
    format!(
        "C'est noté. Je vous rappellerai {} {} à {}.",
        reminder.text,
        spoken_date(reminder.due_at, now),
        spoken_time(reminder.due_at)
    )
}

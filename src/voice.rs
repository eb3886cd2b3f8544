//! Speech output seam.
//!
//! Audio synthesis belongs to the surrounding application; the
//! assistant only hands finished French phrases to a [`SpeechSink`].

/// Consumed interface of the speech synthesizer.
pub trait SpeechSink {
    fn speak(&self, phrase: &str);
}

/// Canned feedback phrases spoken after common actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
    ReminderCreated,
    ReminderDone,
}

impl Feedback {
    pub fn phrase(&self) -> &'static str {
        match self {
            Feedback::Success => "Action effectuée avec succès",
            Feedback::Error => "Une erreur est survenue",
            Feedback::ReminderCreated => "Rappel créé",
            Feedback::ReminderDone => "Rappel terminé",
        }
    }
}

/// Terminal stand-in for the synthesizer: prints phrases to stdout.
/// Muted entirely when voice feedback is disabled in the config.
pub struct ConsoleVoice {
    enabled: bool,
}

impl ConsoleVoice {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl SpeechSink for ConsoleVoice {
    fn speak(&self, phrase: &str) {
        if self.enabled {
            println!("🔊 {}", phrase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_phrases_are_french() {
        assert_eq!(Feedback::ReminderCreated.phrase(), "Rappel créé");
        assert_eq!(Feedback::ReminderDone.phrase(), "Rappel terminé");
        assert_eq!(Feedback::Error.phrase(), "Une erreur est survenue");
    }
}

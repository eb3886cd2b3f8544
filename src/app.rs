use anyhow::Result;
use chrono::Local;
use log::debug;
use rustyline::DefaultEditor;
use uuid::Uuid;

use crate::assistant::{Assistant, AssistantError};
use crate::config::Config;
use crate::parser::speech::long_date;
use crate::reminder::MemoryStore;
use crate::voice::ConsoleVoice;

/// One terminal command, parsed from a typed line. Anything that is not
/// a command is treated as a reminder utterance, the way a finalized
/// voice transcript would be.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Complete(usize),
    Snooze(usize),
    Briefing,
    Help,
    Exit,
    Utterance(String),
}

fn parse_command(line: &str) -> Command {
    let mut parts = line.trim().split_whitespace();
    let head = parts.next().unwrap_or("").to_lowercase();
    let index = parts.next().and_then(|n| n.parse::<usize>().ok());

    match (head.as_str(), index) {
        ("rappels", _) | ("list", _) => Command::List,
        ("ok", Some(n)) => Command::Complete(n),
        ("later", Some(n)) | ("plus-tard", Some(n)) => Command::Snooze(n),
        ("matin", _) => Command::Briefing,
        ("aide", _) | ("help", _) => Command::Help,
        ("exit", _) | ("quit", _) => Command::Exit,
        _ => Command::Utterance(line.trim().to_string()),
    }
}

pub struct Application {
    assistant: Assistant,
}

impl Application {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;

        // Without a configured circle the session still works, scoped to
        // a throwaway one.
        let circle_id = config.profile.circle.unwrap_or_else(Uuid::new_v4);
        let user_id = Uuid::new_v4();
        debug!("Session circle {}, user {}", circle_id, user_id);

        let assistant = Assistant::new(
            Box::new(MemoryStore::new()),
            Box::new(ConsoleVoice::new(config.speech.enabled)),
            circle_id,
            user_id,
        );

        Ok(Self { assistant })
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting Rappel terminal");

        let mut rl = DefaultEditor::new()?;

        println!("Bienvenue ! Dites par exemple : \"Rappelle-moi la pharmacie demain à 10h\"");
        println!("Tapez 'aide' pour la liste des commandes.");
        let prompt = "🎙 ";

        loop {
            match rl.readline(prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    if !self.process_line(&line) {
                        break;
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one line; returns false when the session should end.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        match parse_command(line) {
            Command::List => self.list_reminders(),
            Command::Complete(n) => self.with_reminder(n, |assistant, id| assistant.complete(id)),
            Command::Snooze(n) => self.with_reminder(n, |assistant, id| assistant.snooze(id)),
            Command::Briefing => {
                let now = Local::now().naive_local();
                println!("{}", self.assistant.briefing(now));
            }
            Command::Help => print_help(),
            Command::Exit => return false,
            Command::Utterance(transcript) => self.handle_utterance(&transcript),
        }
        true
    }

    fn handle_utterance(&mut self, transcript: &str) {
        let now = Local::now().naive_local();
        match self.assistant.create_from_utterance(transcript, now) {
            Ok(reminder) => {
                println!("Rappel créé : {} — {}", reminder.text, long_date(reminder.due_at));
            }
            Err(AssistantError::NotUnderstood) => {
                println!("Je n'ai pas compris. Essayez de nouveau.");
            }
            Err(err) => {
                log::error!("Failed to create reminder: {:?}", err);
                println!("Erreur lors de la création du rappel");
            }
        }
    }

    fn list_reminders(&self) {
        let open = self.assistant.open_reminders();
        if open.is_empty() {
            println!("Aucun rappel en cours");
            return;
        }
        println!("Rappels en cours ({})", open.len());
        for (index, reminder) in open.iter().enumerate() {
            println!("  {}. {} — {}", index + 1, reminder.text, long_date(reminder.due_at));
        }
    }

    /// Resolve a 1-based list index and run an action on that reminder.
    fn with_reminder<F>(&mut self, index: usize, action: F)
    where
        F: FnOnce(&mut Assistant, Uuid) -> Result<(), AssistantError>,
    {
        let open = self.assistant.open_reminders();
        match index.checked_sub(1).and_then(|i| open.get(i)) {
            Some(reminder) => {
                if let Err(err) = action(&mut self.assistant, reminder.id) {
                    log::error!("Reminder action failed: {:?}", err);
                    println!("Erreur lors de la mise à jour");
                }
            }
            None => println!("Pas de rappel numéro {}", index),
        }
    }
}

fn print_help() {
    println!("Commandes :");
    println!("  <phrase>        - créer un rappel (ex : \"Appeler Marie vendredi à 14h\")");
    println!("  rappels         - lister les rappels en cours");
    println!("  ok <n>          - terminer le rappel numéro n");
    println!("  later <n>       - reporter le rappel numéro n de 30 minutes");
    println!("  matin           - écouter le résumé de la journée");
    println!("  aide            - afficher cette aide");
    println!("  exit            - quitter");
}

pub mod app;
pub mod assistant;
pub mod briefing;
pub mod config;
pub mod parser;
pub mod reminder;
pub mod voice;

use anyhow::Result;
use log::info;

pub fn run() -> Result<()> {
    let mut app = app::Application::new()?;
    info!("Initializing Rappel application");
    app.run()
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use assistant::{Assistant, AssistantError};
pub use config::Config;
pub use parser::{parse, spoken_date, spoken_time, ParsedReminder};
pub use reminder::{Reminder, ReminderStatus, ReminderStore};

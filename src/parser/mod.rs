//! Rappel parser module
//!
//! This module turns a French reminder utterance into a structured
//! reminder draft, and renders dates and times back into French spoken
//! phrases for voice confirmation.

pub mod speech;
pub mod utterance;

// Re-export the parser entry points so callers can use parser::parse directly
pub use speech::{spoken_date, spoken_time};
pub use utterance::{parse, ParsedReminder};

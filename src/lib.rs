/**
 * Flash cards and quizzes generated from markdown tables.
 *
 * Version: October 2026
 */
#[macro_use]
pub mod iohelper;
pub mod card;
pub mod common;
pub mod deck;
pub mod matching;
pub mod parser;
pub mod persistence;
pub mod quiz;
pub mod ui;

pub use card::{Card, DEFAULT_SECTION};
pub use common::{FlashError, Result};
pub use deck::compose;
pub use matching::{check_answer, Verdict};
pub use parser::{load, parse, Document};
pub use persistence::{HistoryStore, QuizOutcome};
pub use quiz::QuizSummary;

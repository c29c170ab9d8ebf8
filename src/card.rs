/**
 * The `Card` type shared by the parser, the deck composer and the quiz.
 *
 * Version: October 2026
 */
use serde::Serialize;

use super::common::{FlashError, Result};


/// The section that cards belong to when no heading precedes their table.
pub const DEFAULT_SECTION: &str = "General";


/// Represents a single study item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// The term to be recalled. It may be a comma-separated list of synonyms, e.g.
    /// `"IV, intravenous"`, all of which are accepted answers.
    term: String,
    interpretation: String,
    /// Optional annotation shown on the back of the card. Empty if absent.
    extra: String,
    section: String,
}


impl Card {
    /// Return a new card, or an error if `term`, `interpretation` or `section` is
    /// empty.
    pub fn new(term: &str, interpretation: &str, extra: &str, section: &str) -> Result<Self> {
        if term.is_empty() {
            return Err(FlashError::InvalidCard("term"));
        }
        if interpretation.is_empty() {
            return Err(FlashError::InvalidCard("interpretation"));
        }
        if section.is_empty() {
            return Err(FlashError::InvalidCard("section"));
        }

        Ok(Card {
            term: term.to_string(),
            interpretation: interpretation.to_string(),
            extra: extra.to_string(),
            section: section.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn interpretation(&self) -> &str {
        &self.interpretation
    }

    pub fn extra(&self) -> &str {
        &self.extra
    }

    pub fn section(&self) -> &str {
        &self.section
    }
}

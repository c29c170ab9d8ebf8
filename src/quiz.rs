/**
 * Study and quiz sessions over a composed deck.
 *
 * Version: October 2026
 */
use super::card::Card;
use super::common::{FlashError, Result};
use super::matching::{check_answer, Verdict};
use super::ui::CmdUI;


/// Tallies the verdicts of a quiz.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub total: usize,
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
}


impl QuizSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Partial => self.partial += 1,
            Verdict::Incorrect => self.incorrect += 1,
        }
    }

    /// The number of answers that received credit. Partially correct answers count.
    pub fn total_correct(&self) -> usize {
        self.correct + self.partial
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            100.0 * (self.total_correct() as f64) / (self.total as f64)
        } else {
            0.0
        }
    }
}


/// Ask the term for each card's interpretation. The quiz ends early if the user presses
/// Ctrl+D or Ctrl+C, and only the questions answered until then are counted.
pub fn take(deck: &[&Card], ui: &mut CmdUI) -> Result<QuizSummary> {
    let mut summary = QuizSummary::new();

    for card in deck.iter() {
        ui.next();
        ui.text(card.interpretation())?;

        let guess = match ui.prompt() {
            Ok(Some(guess)) => guess,
            Ok(None) | Err(FlashError::ReadlineInterrupted) => break,
            Err(e) => return Err(e),
        };

        let verdict = check_answer(&guess, card.term());
        match verdict {
            Verdict::Correct => ui.correct()?,
            Verdict::Partial => ui.partial(card.term())?,
            Verdict::Incorrect => ui.incorrect(card.term())?,
        }
        summary.record(verdict);
    }

    Ok(summary)
}


/// Show each card's front, wait for the user, then show its back. In inverted mode the
/// interpretation is on the front and the term on the back. Return the number of cards
/// that were flipped.
pub fn study(deck: &[&Card], ui: &mut CmdUI, invert: bool) -> Result<usize> {
    let mut flipped = 0;

    for card in deck.iter() {
        ui.next();
        let (front, back, extra) = sides(card, invert);
        ui.text(front)?;

        match ui.flip() {
            Ok(true) => {},
            Ok(false) | Err(FlashError::ReadlineInterrupted) => break,
            Err(e) => return Err(e),
        }

        ui.back(back, extra)?;
        flipped += 1;
    }

    Ok(flipped)
}


/// Return the front, the back and the annotation of a card.
fn sides(card: &Card, invert: bool) -> (&str, &str, Option<&str>) {
    if invert {
        (card.interpretation(), card.term(), None)
    } else {
        let extra = if card.extra().is_empty() { None } else { Some(card.extra()) };
        (card.term(), card.interpretation(), extra)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_partial_answers_as_correct() {
        let mut summary = QuizSummary::new();
        summary.record(Verdict::Correct);
        summary.record(Verdict::Partial);
        summary.record(Verdict::Incorrect);
        summary.record(Verdict::Incorrect);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.total_correct(), 2);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.percentage(), 50.0);
    }

    #[test]
    fn empty_summary_scores_zero() {
        assert_eq!(QuizSummary::new().percentage(), 0.0);
    }

    #[test]
    fn cards_have_two_sides() {
        let card = Card::new("hypertension", "high blood pressure", "HTN", "Cardiology").unwrap();

        assert_eq!(
            sides(&card, false),
            ("hypertension", "high blood pressure", Some("HTN"))
        );
        assert_eq!(sides(&card, true), ("high blood pressure", "hypertension", None));

        let card = Card::new("PO", "by mouth", "", "Pharmacology").unwrap();
        assert_eq!(sides(&card, false), ("PO", "by mouth", None));
    }
}

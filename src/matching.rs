/**
 * Grading of typed quiz answers.
 *
 * A term may list several synonyms separated by commas, e.g. "IV, intravenous". The
 * user may answer with any non-empty subset of them, also comma-separated.
 *
 * Version: October 2026
 */
use std::collections::HashSet;


/// The outcome of checking an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The answer names exactly the accepted synonyms.
    Correct,
    /// The answer names some, but not all, of the accepted synonyms, and nothing else.
    Partial,
    Incorrect,
}


impl Verdict {
    /// Partial answers are given full credit.
    pub fn is_correct(self) -> bool {
        self != Verdict::Incorrect
    }
}


/// Check `guess` against `term`. Comparison ignores case, surrounding whitespace,
/// hyphens, the order of the comma-separated parts and repeated parts.
pub fn check_answer(guess: &str, term: &str) -> Verdict {
    let guessed = split_terms(guess);
    let accepted = split_terms(term);

    if guessed == accepted {
        Verdict::Correct
    } else if !guessed.is_empty() && guessed.is_subset(&accepted) {
        Verdict::Partial
    } else {
        Verdict::Incorrect
    }
}


fn split_terms(s: &str) -> HashSet<String> {
    s.split(',')
        .map(normalize)
        .filter(|t| !t.is_empty())
        .collect()
}


fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "")
}

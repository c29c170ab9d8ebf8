/**
 * Functions and data structures for reading and writing the quiz history file.
 *
 * The history is a CSV file with one row per completed quiz:
 *
 *   time,number_of_questions,number_of_correct_answers
 *   2026-10-18T14:03:27.512034,20,17
 *
 * Rows are only ever appended.
 *
 * Version: October 2026
 */
use std::fs;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::common::{FlashError, Result};


/// Represents the result of taking a quiz on a particular occasion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub time: NaiveDateTime,
    #[serde(rename = "number_of_questions")]
    pub total: usize,
    #[serde(rename = "number_of_correct_answers")]
    pub correct: usize,
}


impl QuizOutcome {
    /// Return the percentage of correct answers.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            100.0 * (self.correct as f64) / (self.total as f64)
        } else {
            0.0
        }
    }
}


pub struct HistoryStore {
    path: PathBuf,
}


impl HistoryStore {
    pub fn new(path: &Path) -> Self {
        HistoryStore { path: path.to_path_buf() }
    }

    /// Open the history file in the application's data directory.
    pub fn open_default() -> Self {
        HistoryStore::new(&get_history_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a quiz in which `correct` out of `total` questions were answered
    /// correctly, timestamped with the current local time. The history file and its
    /// parent directories are created if they do not exist.
    pub fn append(&self, total: usize, correct: usize) -> Result<QuizOutcome> {
        if total == 0 || correct > total {
            return Err(FlashError::InvalidOutcome { total, correct });
        }

        let outcome = QuizOutcome {
            time: chrono::Local::now().naive_local().trunc_subsecs(6),
            total,
            correct,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .or(Err(FlashError::CannotWriteToFile(self.path.clone())))?;
            }
        }

        // The header is written only once, when the file is first created.
        let write_header = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .or(Err(FlashError::CannotWriteToFile(self.path.clone())))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(&outcome).map_err(FlashError::Csv)?;
        writer.flush().map_err(FlashError::Io)?;

        log::debug!("appended quiz outcome to {}", self.path.display());
        Ok(outcome)
    }

    /// Return every recorded quiz, oldest first. If the history file does not exist
    /// yet, an empty vector is returned.
    pub fn load_all(&self) -> Result<Vec<QuizOutcome>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .or(Err(FlashError::CannotReadHistory(self.path.clone())))?;

        let mut outcomes = Vec::new();
        for row in reader.deserialize() {
            let outcome: QuizOutcome = row.map_err(FlashError::Csv)?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}


/// Return the default location of the history file, e.g.
/// `~/.local/share/flashcards/history.csv` on Linux.
pub fn get_history_path() -> PathBuf {
    let mut dirpath = get_app_dir_path();
    dirpath.push("history.csv");
    dirpath
}


fn get_app_dir_path() -> PathBuf {
    let mut dirpath = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    dirpath.push("flashcards");
    dirpath
}


#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_history_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(&dir.path().join("history.csv"));
        assert_eq!(store.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn can_append_and_load() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(&dir.path().join("nested").join("history.csv"));

        let first = store.append(20, 17).unwrap();
        let second = store.append(5, 0).unwrap();

        let outcomes = store.load_all().unwrap();
        assert_eq!(outcomes, vec![first, second]);
        assert_eq!(outcomes[1].total, 5);
        assert_eq!(outcomes[1].correct, 0);
    }

    #[test]
    fn header_is_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        let store = HistoryStore::new(&path);

        store.append(3, 2).unwrap();
        store.append(4, 4).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "time,number_of_questions,number_of_correct_answers");
        assert!(lines[1].ends_with(",3,2"));
        assert!(lines[2].ends_with(",4,4"));
    }

    #[test]
    fn can_read_existing_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "time,number_of_questions,number_of_correct_answers\n\
             2025-01-05T09:15:00.123456,10,7\n\
             2025-01-06T21:00:00,100,100\n",
        ).unwrap();

        let outcomes = HistoryStore::new(&path).load_all().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].time.to_string(), "2025-01-05 09:15:00.123456");
        assert_eq!((outcomes[0].total, outcomes[0].correct), (10, 7));
        assert_eq!((outcomes[1].total, outcomes[1].correct), (100, 100));
    }

    #[test]
    fn malformed_history_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(
            &path,
            "time,number_of_questions,number_of_correct_answers\nyesterday,ten,7\n",
        ).unwrap();

        assert!(matches!(HistoryStore::new(&path).load_all(), Err(FlashError::Csv(_))));
    }

    #[test]
    fn impossible_scores_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        let store = HistoryStore::new(&path);

        assert!(matches!(store.append(0, 0), Err(FlashError::InvalidOutcome { .. })));
        assert!(matches!(store.append(3, 4), Err(FlashError::InvalidOutcome { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn percentage_works() {
        let outcome = QuizOutcome {
            time: chrono::Local::now().naive_local(),
            total: 8,
            correct: 6,
        };
        assert_eq!(outcome.percentage(), 75.0);
    }
}

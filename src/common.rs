/**
 * Definitions of data structures used by several modules, such as `FlashError` and the
 * various structs that hold command-line arguments.
 *
 * Version: October 2026
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};


pub type Result<T> = ::std::result::Result<T, FlashError>;


#[derive(Debug)]
pub enum FlashError {
    /// For when the source document does not exist or cannot be read.
    DocumentNotFound(PathBuf),
    /// For when the history file exists but cannot be read.
    CannotReadHistory(PathBuf),
    /// For when the history file cannot be created or appended to.
    CannotWriteToFile(PathBuf),
    /// For CSV errors in the history file.
    Csv(csv::Error),
    /// For JSON errors when exporting the history.
    Json(serde_json::Error),
    Io(io::Error),
    /// A card was constructed with an empty required field.
    InvalidCard(&'static str),
    /// A quiz outcome was recorded with an impossible score.
    InvalidOutcome { total: usize, correct: usize },
    ReadlineInterrupted,
}


impl fmt::Display for FlashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlashError::DocumentNotFound(path) => {
                write!(f, "could not read cards from '{}'", path.to_string_lossy())
            },
            FlashError::CannotReadHistory(path) => {
                write!(f, "cannot read history file '{}'", path.to_string_lossy())
            },
            FlashError::CannotWriteToFile(path) => {
                write!(f, "cannot write to file '{}'", path.to_string_lossy())
            },
            FlashError::Csv(err) => {
                write!(f, "could not parse history ({})", err)
            },
            FlashError::Json(err) => {
                write!(f, "could not serialize JSON ({})", err)
            },
            FlashError::Io(err) => {
                write!(f, "IO error ({})", err)
            },
            FlashError::InvalidCard(field) => {
                write!(f, "card is missing its {}", field)
            },
            FlashError::InvalidOutcome { total, correct } => {
                write!(f, "cannot record {} correct out of {} questions", correct, total)
            },
            FlashError::ReadlineInterrupted => {
                Ok(())
            },
        }
    }
}


impl error::Error for FlashError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FlashError::Csv(err) => Some(err),
            FlashError::Json(err) => Some(err),
            FlashError::Io(err) => Some(err),
            _ => None,
        }
    }
}


/// Return `true` if `e` is a broken pipe on standard output, e.g. when the output of
/// `flashcards scoreboard` is piped into `head`.
pub fn is_broken_pipe(e: &FlashError) -> bool {
    if let FlashError::Io(e) = e {
        e.kind() == io::ErrorKind::BrokenPipe
    } else {
        false
    }
}


/// Holds the command-line configuration for the application.
#[derive(Parser)]
#[command(name = "flashcards", about = "Study flash cards and take quizzes from the command line.")]
pub struct Options {
    /// Location of the quiz history file.
    #[arg(long = "history", global = true)]
    pub history: Option<PathBuf>,
    /// Do not emit colorized output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flip through flash cards.
    Study(StudyOptions),
    /// Take a quiz: type the term for each interpretation.
    Quiz(QuizOptions),
    /// Show the results of previous quizzes.
    Scoreboard(ScoreboardOptions),
    /// List the sections of a card file.
    Sections(SectionsOptions),
}

#[derive(Args)]
pub struct StudyOptions {
    /// Path to the card file.
    pub path: PathBuf,
    /// Show the interpretation first and the term on the back.
    #[arg(long = "invert")]
    pub invert: bool,
    #[command(flatten)]
    pub deck_opts: DeckOptions,
}

#[derive(Args)]
pub struct QuizOptions {
    /// Path to the card file.
    pub path: PathBuf,
    /// Do not record the result in the history.
    #[arg(long = "no-save")]
    pub no_save: bool,
    #[command(flatten)]
    pub deck_opts: DeckOptions,
}

/// These options are shared between the `study` and `quiz` subcommands.
#[derive(Args)]
pub struct DeckOptions {
    /// Number of cards in the session. Cards repeat when this exceeds the number of
    /// cards available.
    #[arg(short = 'n', default_value_t = 100)]
    pub num_to_ask: usize,
    /// Only use cards from the given section. May be given more than once.
    #[arg(long = "section")]
    pub sections: Vec<String>,
    /// Seed for the random number generator.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ScoreboardOptions {
    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = ScoreboardFormat::Table)]
    pub format: ScoreboardFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScoreboardFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct SectionsOptions {
    /// Path to the card file.
    pub path: PathBuf,
}

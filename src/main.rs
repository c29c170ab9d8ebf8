/**
 * Study flash cards and take quizzes from the command line.
 *
 * Version: October 2026
 */
use std::io::Write;

use clap::Parser;
use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use flashcards::common::{
    self, Command, DeckOptions, FlashError, Options, QuizOptions, Result, ScoreboardFormat,
    ScoreboardOptions, SectionsOptions, StudyOptions,
};
use flashcards::persistence::HistoryStore;
use flashcards::ui::CmdUI;
use flashcards::parser::Document;
use flashcards::{deck, my_println, parser, quiz, Card};


fn main() {
    env_logger::init();
    let options = Options::parse();

    if options.no_color {
        colored::control::set_override(false);
    }

    let history = match &options.history {
        Some(path) => HistoryStore::new(path),
        None => HistoryStore::open_default(),
    };

    let result = match options.cmd {
        Command::Study(options) => main_study(options),
        Command::Quiz(options) => main_quiz(options, &history),
        Command::Scoreboard(options) => main_scoreboard(options, &history),
        Command::Sections(options) => main_sections(options),
    };

    if let Err(e) = result {
        if !common::is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}


/// The main function for the `study` subcommand.
pub fn main_study(options: StudyOptions) -> Result<()> {
    let document = parser::load(&options.path)?;
    let deck = choose_cards(&document, &options.deck_opts);

    let mut ui = CmdUI::new(deck.len());
    if deck.is_empty() {
        return ui.empty();
    }

    let flipped = quiz::study(&deck, &mut ui, options.invert)?;
    log::debug!("studied {} of {} card(s)", flipped, deck.len());
    Ok(())
}


/// The main function for the `quiz` subcommand.
pub fn main_quiz(options: QuizOptions, history: &HistoryStore) -> Result<()> {
    let document = parser::load(&options.path)?;
    let deck = choose_cards(&document, &options.deck_opts);

    let mut ui = CmdUI::new(deck.len());
    if deck.is_empty() {
        return ui.empty();
    }

    let results = quiz::take(&deck, &mut ui)?;
    ui.results(&results)?;

    if results.total > 0 && !options.no_save {
        history.append(results.total, results.total_correct())?;
    }
    Ok(())
}


/// The main function for the `scoreboard` subcommand.
pub fn main_scoreboard(options: ScoreboardOptions, history: &HistoryStore) -> Result<()> {
    let outcomes = history.load_all()?;

    match options.format {
        ScoreboardFormat::Table => CmdUI::new(0).scoreboard(&outcomes),
        ScoreboardFormat::Json => {
            let serialized = serde_json::to_string_pretty(&outcomes).map_err(FlashError::Json)?;
            my_println!("{}", serialized)
        },
    }
}


/// The main function for the `sections` subcommand.
pub fn main_sections(options: SectionsOptions) -> Result<()> {
    let document = parser::load(&options.path)?;

    if document.sections.is_empty() {
        return my_println!("No cards found.");
    }

    for section in document.sections.iter() {
        let count = document.cards.iter().filter(|c| c.section() == section).count();
        my_println!("{:>5}  {}", count, section)?;
    }
    my_println!("{:>5}  {}", document.cards.len(), "total")
}


fn choose_cards<'a>(document: &'a Document, options: &DeckOptions) -> Vec<&'a Card> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // No --section flag means every section.
    let sections = if options.sections.is_empty() {
        &document.sections
    } else {
        &options.sections
    };

    deck::compose(&document.cards, sections, options.num_to_ask, &mut rng)
}

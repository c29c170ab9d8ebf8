/**
 * The command-line user interface for studying cards and taking quizzes.
 *
 * Version: October 2026
 */
use std::io::Write;

use colored::*;

use super::common::Result;
use super::iohelper::{pause, prettyprint, prettyprint_colored, prompt};
use super::persistence::QuizOutcome;
use super::quiz::QuizSummary;


pub struct CmdUI {
    number: usize,
    total: usize,
}


impl CmdUI {
    /// Return a new UI for a session of `total` cards.
    pub fn new(total: usize) -> Self {
        Self { number: 0, total }
    }

    pub fn next(&mut self) {
        self.number += 1;
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        my_print!("\n")?;
        let prefix = format!("  ({}/{}) ", self.number, self.total);
        prettyprint_colored(text, &prefix, None, Some(Color::Cyan))
    }

    pub fn prompt(&mut self) -> Result<Option<String>> {
        prompt("> ")
    }

    /// Wait for the user to flip the card. Return `false` if they want to stop.
    pub fn flip(&mut self) -> Result<bool> {
        pause("(press Enter to flip) ")
    }

    pub fn back(&mut self, text: &str, extra: Option<&str>) -> Result<()> {
        let indent = " ".repeat(format!("  ({}/{}) ", self.number, self.total).len());
        prettyprint_colored(text, &indent, Some(Color::Green), None)?;
        if let Some(extra) = extra {
            prettyprint(&format!("({})", extra), &indent)?;
        }
        Ok(())
    }

    pub fn correct(&mut self) -> Result<()> {
        prettyprint(&format!("{}", "Correct!".green()), "")
    }

    pub fn partial(&mut self, full_answer: &str) -> Result<()> {
        let message = format!("{} {}", "Correct! Full answer:".green(), full_answer.bold());
        prettyprint(&message, "")
    }

    pub fn incorrect(&mut self, answer: &str) -> Result<()> {
        let message = format!("{} {}", "Incorrect. Answer:".red(), answer.bold());
        prettyprint(&message, "")
    }

    pub fn empty(&mut self) -> Result<()> {
        my_println!("No cards found.")
    }

    pub fn results(&mut self, results: &QuizSummary) -> Result<()> {
        if results.total > 0 {
            let score_as_str = format!("{:.0}%", results.percentage());

            my_print!("\n\n")?;
            my_println!(
                "You got {} out of {} correct ({})",
                format!("{}", results.total_correct()).green(),
                format!("{}", results.total).cyan(),
                score_as_str.cyan()
            )?;
            if results.partial > 0 {
                my_print!("  {}", format!("{}", results.partial).bright_green())?;
                my_print!(" partially correct\n")?;
            }
            my_print!("  {}", format!("{}", results.incorrect).red())?;
            my_print!(" incorrect\n")?;
        }
        Ok(())
    }

    /// Print past quiz outcomes, most recent first.
    pub fn scoreboard(&mut self, outcomes: &[QuizOutcome]) -> Result<()> {
        if outcomes.is_empty() {
            return my_println!("No quiz history yet");
        }

        my_println!(
            "{:<16}  {:>9}  {:>7}  {:>10}",
            "Date/Time", "Questions", "Correct", "Percentage"
        )?;
        for outcome in outcomes.iter().rev() {
            let percentage = format!("{:.0}%", outcome.percentage());
            my_println!(
                "{:<16}  {:>9}  {:>7}  {:>10}",
                outcome.time.format("%Y-%m-%d %H:%M").to_string(),
                outcome.total,
                outcome.correct,
                percentage
            )?;
        }
        Ok(())
    }
}

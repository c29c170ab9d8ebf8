/**
 * Parser for card files: markdown documents containing `|`-delimited tables, optionally
 * grouped under setext-style (`====`) section headings.
 *
 *   Cardiology
 *   ==========
 *
 *   | Term        | Interpretation  | Extra |
 *   | ----------- | --------------- | ----- |
 *   | bradycardia | slow heart rate |       |
 *
 * Version: October 2026
 */
use std::fs;
use std::path::Path;

use super::card::{Card, DEFAULT_SECTION};
use super::common::{FlashError, Result};


const DELIMITER: char = '|';


/// The result of parsing a card file.
#[derive(Debug, Default)]
pub struct Document {
    pub cards: Vec<Card>,
    /// Names of the sections that contain at least one table, in the order they were
    /// first seen.
    pub sections: Vec<String>,
}


/// Read and parse the card file at `path`.
pub fn load(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .map_err(|_| FlashError::DocumentNotFound(path.to_path_buf()))?;
    let document = parse(&text);
    log::debug!(
        "loaded {} card(s) in {} section(s) from {}",
        document.cards.len(),
        document.sections.len(),
        path.display()
    );
    Ok(document)
}


/// Parse the text of a card file. Malformed rows are skipped rather than reported.
pub fn parse(text: &str) -> Document {
    let lines: Vec<&str> = text.lines().collect();
    let mut document = Document::default();
    let mut section = String::from(DEFAULT_SECTION);

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        let next = lines.get(i + 1).map(|l| l.trim());

        if is_heading(line, next) {
            section = line.to_string();
            i += 2;
        } else if is_table_start(line, next) {
            register_section(&mut document.sections, &section);
            // Skip the header and separator rows.
            i += 2;
            while i < lines.len() {
                let row = lines[i].trim();
                if !row.starts_with(DELIMITER) {
                    break;
                }
                if let Some(card) = read_row(row, &section) {
                    document.cards.push(card);
                } else {
                    log::debug!("skipping malformed row on line {}: {}", i + 1, row);
                }
                i += 1;
            }
        } else {
            i += 1;
        }
    }

    document
}


fn is_heading(line: &str, next: Option<&str>) -> bool {
    match next {
        Some(next) => !line.is_empty() && next.len() >= 4 && next.chars().all(|c| c == '='),
        None => false,
    }
}


fn is_table_start(line: &str, next: Option<&str>) -> bool {
    line.starts_with(DELIMITER)
        && line[DELIMITER.len_utf8()..].contains(DELIMITER)
        && next.map(|l| l.contains("----")).unwrap_or(false)
}


/// Sections are registered when their first table is found, so a heading with no table
/// under it never appears in the catalog.
fn register_section(sections: &mut Vec<String>, section: &str) {
    if !sections.iter().any(|s| s == section) {
        log::debug!("found section '{}'", section);
        sections.push(section.to_string());
    }
}


fn read_row(row: &str, section: &str) -> Option<Card> {
    let cells = split_row(row);
    if cells.len() < 2 {
        return None;
    }

    let extra = cells.get(2).copied().unwrap_or("");
    Card::new(cells[0], cells[1], extra, section).ok()
}


/// Split a table row into trimmed cells. Only the empty cells produced by the bounding
/// delimiters are dropped, so a blank column in the middle of a row is kept as `""`.
fn split_row(row: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = row.split(DELIMITER).map(|c| c.trim()).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells
}

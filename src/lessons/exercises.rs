//! The worked exercises that close the walkthrough

use crate::error::Result;
use crate::input::WordSource;
use crate::lessons::LessonReport;
use crate::sequence::{List, Stats};
use crate::value::Value;
use crate::{list, tuple};

pub const SEARCH_PROMPT: &str = "Enter a word to search for: ";

/// Result of looking a word up in the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(String),
    Added(String),
}

/// Look `query` up in `words`, lower-cased and trimmed, appending it when it
/// is missing.
pub fn search_word(words: &mut List, query: &str) -> SearchOutcome {
    let word = query.trim().to_lowercase();
    if words.contains(&Value::from(word.as_str())) {
        SearchOutcome::Found(word)
    } else {
        words.append(word.as_str());
        SearchOutcome::Added(word)
    }
}

/// Statistics lesson over arbitrary numbers
pub fn stats_report(numbers: &List) -> Result<LessonReport> {
    let mut report = LessonReport::new("stats", "Number analysis");
    write_stats(&mut report, numbers)?;
    Ok(report)
}

fn write_stats(report: &mut LessonReport, numbers: &List) -> Result<()> {
    report.show("numbers", numbers);

    let stats = Stats::compute(numbers.as_slice())?;
    report.show("count", stats.count);
    report.show("min", &stats.min);
    report.show("max", &stats.max);
    report.show("sum", &stats.sum);
    report.show("average", stats.average_display());
    Ok(())
}

pub fn number_analysis(report: &mut LessonReport) -> Result<()> {
    write_stats(report, &list![22.5, 10, -5, 100.0, 33])
}

pub fn word_search(report: &mut LessonReport, input: &mut dyn WordSource) -> Result<()> {
    let mut palabras = list!["python", "backend", "curso", "lista", "tupla"];
    report.show("palabras", &palabras);

    let answer = input.read_word(SEARCH_PROMPT)?;
    match search_word(&mut palabras, &answer) {
        SearchOutcome::Found(word) => {
            report.text(format!("The word '{}' IS in the list!", word));
        }
        SearchOutcome::Added(word) => {
            report.text(format!("The word '{}' is NOT in the list.", word));
            report.show("added, updated list", &palabras);
        }
    }
    Ok(())
}

pub fn coordinates(report: &mut LessonReport) -> Result<()> {
    let punto_inicial = tuple![50, 120];
    report.show("punto_inicial", &punto_inicial);
    report.show("punto_inicial[0]", punto_inicial.get(0)?);
    report.show("punto_inicial[1]", punto_inicial.get(1)?);

    report.text("Trying to modify the tuple...");
    if let Err(e) = punto_inicial.set_item(0, 75) {
        report.expected_error("punto_inicial[0] = 75", &e);
    }

    let [x_coord, y_coord] = punto_inicial.unpack()?;
    report.show("x_coord", x_coord);
    report.show("y_coord", y_coord);
    Ok(())
}

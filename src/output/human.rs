//! Human-readable output formatting

use crate::lessons::{LessonInfo, LessonReport, Step};

pub fn format_human(report: &LessonReport) -> String {
    let mut output = format!("{}\n{}\n", report.title, "-".repeat(report.title.chars().count()));
    for step in &report.steps {
        match step {
            Step::Value { label, value } => {
                output.push_str(&format!("{}: {}\n", label, value));
            }
            Step::Text { text } => {
                output.push_str(text);
                output.push('\n');
            }
            Step::ExpectedError { label, error } => {
                output.push_str(&format!("{} -> expected error: {}\n", label, error));
            }
        }
    }
    output
}

pub fn format_human_all(reports: &[LessonReport]) -> String {
    reports
        .iter()
        .map(format_human)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_human_catalog(entries: &[LessonInfo]) -> String {
    let mut output = String::from("Lessons\n-------\n");
    for entry in entries {
        let marker = if entry.interactive { " (asks for input)" } else { "" };
        output.push_str(&format!("  {:<22} {}{}\n", entry.name, entry.title, marker));
    }
    output
}

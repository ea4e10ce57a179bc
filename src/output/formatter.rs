//! Output formatting

use crate::lessons::{LessonInfo, LessonReport};
use crate::output::human::{format_human, format_human_all, format_human_catalog};
use crate::output::json::{format_json, format_json_all, format_json_catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Format a batch of lesson reports
pub fn format_output(reports: &[LessonReport], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_all(reports),
        OutputFormat::Json => format_json_all(reports),
    }
}

/// Format a single lesson report
pub fn format_report(report: &LessonReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

/// Format the list of available lessons
pub fn format_catalog(entries: &[LessonInfo], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_catalog(entries),
        OutputFormat::Json => format_json_catalog(entries),
    }
}

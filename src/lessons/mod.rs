//! The walkthrough, split into lessons that run top to bottom

pub mod exercises;
pub mod lists;
pub mod report;
pub mod tuples;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::input::WordSource;
use crate::output::OutputFormat;

pub use exercises::{search_word, stats_report, SearchOutcome};
pub use report::{LessonReport, Step};

/// Runtime settings resolved from the command line
#[derive(Debug, Clone)]
pub struct LessonContext {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Default for LessonContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    Construction,
    Indexing,
    Slicing,
    Mutation,
    Ordering,
    Combining,
    Aggregates,
    Iteration,
    Tuples,
    Immutability,
    Unpacking,
    StatsExercise,
    SearchExercise,
    CoordinatesExercise,
}

impl Lesson {
    /// Every lesson in walkthrough order
    pub const ALL: [Lesson; 14] = [
        Lesson::Construction,
        Lesson::Indexing,
        Lesson::Slicing,
        Lesson::Mutation,
        Lesson::Ordering,
        Lesson::Combining,
        Lesson::Aggregates,
        Lesson::Iteration,
        Lesson::Tuples,
        Lesson::Immutability,
        Lesson::Unpacking,
        Lesson::StatsExercise,
        Lesson::SearchExercise,
        Lesson::CoordinatesExercise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Lesson::Construction => "construction",
            Lesson::Indexing => "indexing",
            Lesson::Slicing => "slicing",
            Lesson::Mutation => "mutation",
            Lesson::Ordering => "ordering",
            Lesson::Combining => "combining",
            Lesson::Aggregates => "aggregates",
            Lesson::Iteration => "iteration",
            Lesson::Tuples => "tuples",
            Lesson::Immutability => "immutability",
            Lesson::Unpacking => "unpacking",
            Lesson::StatsExercise => "stats-exercise",
            Lesson::SearchExercise => "search-exercise",
            Lesson::CoordinatesExercise => "coordinates-exercise",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lesson::Construction => "Creating lists",
            Lesson::Indexing => "Indexing",
            Lesson::Slicing => "Slicing",
            Lesson::Mutation => "Changing a list in place",
            Lesson::Ordering => "Sorting and reversing",
            Lesson::Combining => "Concatenation, repetition and membership",
            Lesson::Aggregates => "Count, min, max and sum",
            Lesson::Iteration => "Looping over a list",
            Lesson::Tuples => "Tuples",
            Lesson::Immutability => "Tuples cannot change",
            Lesson::Unpacking => "Unpacking",
            Lesson::StatsExercise => "Exercise 1: number analysis",
            Lesson::SearchExercise => "Exercise 2: word search",
            Lesson::CoordinatesExercise => "Exercise 3: coordinate tuple",
        }
    }

    /// Whether the lesson stops to read input
    pub fn is_interactive(&self) -> bool {
        matches!(self, Lesson::SearchExercise)
    }
}

/// Catalogue entry printed by `seqlab lessons`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub interactive: bool,
}

impl From<Lesson> for LessonInfo {
    fn from(lesson: Lesson) -> Self {
        Self {
            name: lesson.name(),
            title: lesson.title(),
            interactive: lesson.is_interactive(),
        }
    }
}

/// Every lesson in walkthrough order, ready to print
pub fn catalog() -> Vec<LessonInfo> {
    Lesson::ALL.into_iter().map(LessonInfo::from).collect()
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Lesson {
    type Err = SeqError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| SeqError::UnknownLesson(s.to_string()))
    }
}

/// Run a single lesson. Failures a lesson demonstrates on purpose are
/// recorded in the report; anything else is returned as an error.
pub fn run_lesson(lesson: Lesson, input: &mut dyn WordSource) -> Result<LessonReport> {
    tracing::debug!(lesson = lesson.name(), "running lesson");
    let mut report = LessonReport::new(lesson.name(), lesson.title());

    match lesson {
        Lesson::Construction => lists::construction(&mut report)?,
        Lesson::Indexing => lists::indexing(&mut report)?,
        Lesson::Slicing => lists::slicing(&mut report)?,
        Lesson::Mutation => lists::mutation(&mut report)?,
        Lesson::Ordering => lists::ordering(&mut report)?,
        Lesson::Combining => lists::combining(&mut report)?,
        Lesson::Aggregates => lists::aggregates(&mut report)?,
        Lesson::Iteration => lists::iteration(&mut report)?,
        Lesson::Tuples => tuples::basics(&mut report)?,
        Lesson::Immutability => tuples::immutability(&mut report)?,
        Lesson::Unpacking => tuples::unpacking(&mut report)?,
        Lesson::StatsExercise => exercises::number_analysis(&mut report)?,
        Lesson::SearchExercise => exercises::word_search(&mut report, input)?,
        Lesson::CoordinatesExercise => exercises::coordinates(&mut report)?,
    }

    tracing::debug!(
        lesson = lesson.name(),
        steps = report.steps.len(),
        "lesson finished"
    );
    Ok(report)
}

/// Run every lesson in order, handing each report to `emit` as soon as it
/// is ready so output keeps pace with the interactive prompt.
pub fn run_all(
    input: &mut dyn WordSource,
    mut emit: impl FnMut(&LessonReport),
) -> Result<Vec<LessonReport>> {
    let mut reports = Vec::with_capacity(Lesson::ALL.len());
    for lesson in Lesson::ALL {
        let report = run_lesson(lesson, input)?;
        emit(&report);
        reports.push(report);
    }
    Ok(reports)
}

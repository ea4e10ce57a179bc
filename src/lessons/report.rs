//! What a lesson produced, step by step

use std::fmt::Display;

use serde::Serialize;

use crate::error::SeqError;

/// One printed line of a lesson
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// An expression and the value it produced
    Value { label: String, value: String },
    /// Free text, such as one line of a loop body
    Text { text: String },
    /// An operation that failed the way the lesson intends
    ExpectedError { label: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonReport {
    pub name: String,
    pub title: String,
    pub steps: Vec<Step>,
}

impl LessonReport {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            steps: Vec::new(),
        }
    }

    pub fn show(&mut self, label: impl Into<String>, value: impl Display) {
        self.steps.push(Step::Value {
            label: label.into(),
            value: value.to_string(),
        });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.steps.push(Step::Text { text: text.into() });
    }

    pub fn expected_error(&mut self, label: impl Into<String>, error: &SeqError) {
        self.steps.push(Step::ExpectedError {
            label: label.into(),
            error: error.to_string(),
        });
    }

    /// Value recorded under `label`, if any
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.steps.iter().find_map(|step| match step {
            Step::Value { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn expected_errors(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::ExpectedError { error, .. } => Some(error.as_str()),
            _ => None,
        })
    }
}

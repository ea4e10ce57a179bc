//! Aggregate queries over a sequence of values

use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::value::Value;

pub fn count(values: &[Value]) -> usize {
    values.len()
}

pub fn min(values: &[Value]) -> Result<Value> {
    extreme(values, "min", "<", |ord| ord.is_lt())
}

pub fn max(values: &[Value]) -> Result<Value> {
    extreme(values, "max", ">", |ord| ord.is_gt())
}

fn extreme(
    values: &[Value],
    name: &'static str,
    op: &'static str,
    replaces: impl Fn(std::cmp::Ordering) -> bool,
) -> Result<Value> {
    let (first, rest) = values
        .split_first()
        .ok_or(SeqError::EmptySequence(name))?;

    let mut best = first;
    for candidate in rest {
        if replaces(candidate.compare(best, op)?) {
            best = candidate;
        }
    }
    Ok(best.clone())
}

/// Total of a numeric sequence. Stays an integer until a float shows up;
/// an empty sequence sums to `0`.
pub fn sum(values: &[Value]) -> Result<Value> {
    let mut total = Value::Int(0);
    for value in values {
        total = match (&total, value) {
            (Value::Int(a), Value::Int(b)) => match a.checked_add(*b) {
                Some(n) => Value::Int(n),
                None => Value::Float(*a as f64 + *b as f64),
            },
            (acc, v) => match (acc.as_f64(), v.as_f64()) {
                (Some(a), Some(b)) => Value::Float(a + b),
                _ => return Err(SeqError::NotNumeric(v.type_name())),
            },
        };
    }
    Ok(total)
}

/// Mean of a numeric sequence, `0.0` when it is empty
pub fn average(values: &[Value]) -> Result<f64> {
    let total = sum(values)?;
    let n = count(values);
    if n == 0 {
        return Ok(0.0);
    }
    Ok(total.as_f64().unwrap_or_default() / n as f64)
}

/// Descriptive statistics for a numeric sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub min: Value,
    pub max: Value,
    pub sum: Value,
    pub average: f64,
}

impl Stats {
    pub fn compute(values: &[Value]) -> Result<Self> {
        Ok(Self {
            count: count(values),
            min: min(values)?,
            max: max(values)?,
            sum: sum(values)?,
            average: average(values)?,
        })
    }

    /// Average rounded to two decimals
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average)
    }
}

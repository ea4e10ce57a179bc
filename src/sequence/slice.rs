//! Index and slice resolution shared by lists and tuples

use std::fmt;

use crate::error::{Result, SeqError};

/// A `start:stop:step` range. Missing parts take their defaults when the
/// slice is resolved against a concrete length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// `[:]`
    pub fn full() -> Self {
        Self::default()
    }

    /// `[start:stop]`
    pub fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), None)
    }

    /// `[::-1]`
    pub fn reversed() -> Self {
        Self::new(None, None, Some(-1))
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Parse slice notation such as `2:5`, `::2` or `::-1`.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            return Err(SeqError::InvalidSlice(text.to_string()));
        }

        let bound = |part: &str| -> Result<Option<isize>> {
            let part = part.trim();
            if part.is_empty() {
                return Ok(None);
            }
            part.parse::<isize>()
                .map(Some)
                .map_err(|_| SeqError::InvalidSlice(text.to_string()))
        };

        Ok(Self {
            start: bound(parts[0])?,
            stop: bound(parts[1])?,
            step: parts.get(2).copied().map(bound).transpose()?.flatten(),
        })
    }

    /// Concrete positions selected by this slice on a sequence of `len`
    /// elements, in visiting order. Bounds are clamped, never rejected.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SeqError::ZeroStep);
        }

        let len = len as isize;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: isize| {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(lower, upper)
        };

        let start = match self.start {
            Some(s) => clamp(s),
            None if step > 0 => lower,
            None => upper,
        };
        let stop = match self.stop {
            Some(s) => clamp(s),
            None if step > 0 => upper,
            None => lower,
        };

        let mut out = Vec::new();
        let mut next = Some(start);
        while let Some(i) = next {
            if (step > 0 && i >= stop) || (step < 0 && i <= stop) {
                break;
            }
            out.push(i as usize);
            next = i.checked_add(step);
        }
        Ok(out)
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: Option<isize>| p.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{}:{}", part(self.start), part(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}

/// Map a possibly negative index onto `[0, len)`.
pub fn resolve_index(index: isize, len: usize, container: &'static str) -> Result<usize> {
    let resolved = if index < 0 { index + len as isize } else { index };
    if resolved < 0 || resolved >= len as isize {
        return Err(SeqError::IndexOutOfRange { container, index });
    }
    Ok(resolved as usize)
}

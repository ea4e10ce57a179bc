//! Ordered fixed sequence
//!
//! A `Tuple` exposes no way to change its contents. The item assignment and
//! deletion entry points exist only to report the failure the walkthrough
//! demonstrates.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::sequence::slice::{resolve_index, SliceSpec};
use crate::sequence::List;
use crate::value::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tuple {
    items: Vec<Value>,
}

impl Tuple {
    pub fn new(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// `()`
    pub fn empty() -> Self {
        Self::default()
    }

    /// `(value,)`. Without the trailing comma the parentheses only group a
    /// scalar, which is why this constructor exists at all.
    pub fn single(value: impl Into<Value>) -> Self {
        Self {
            items: vec![value.into()],
        }
    }

    pub fn from_list(list: &List) -> Self {
        Self {
            items: list.as_slice().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn get(&self, index: isize) -> Result<&Value> {
        let i = resolve_index(index, self.items.len(), "tuple")?;
        Ok(&self.items[i])
    }

    /// Slicing a tuple yields a new tuple
    pub fn slice(&self, spec: &SliceSpec) -> Result<Tuple> {
        let picked = spec.indices(self.items.len())?;
        Ok(Tuple::new(
            picked.into_iter().map(|i| self.items[i].clone()).collect(),
        ))
    }

    pub fn concat(&self, other: &Tuple) -> Tuple {
        Tuple::new(self.items.iter().chain(other.items.iter()).cloned().collect())
    }

    pub fn repeat(&self, n: usize) -> Tuple {
        Tuple::new(
            std::iter::repeat(&self.items)
                .take(n)
                .flatten()
                .cloned()
                .collect(),
        )
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Bind the elements to exactly `N` targets
    pub fn unpack<const N: usize>(&self) -> Result<[Value; N]> {
        super::unpack(&self.items)
    }

    /// `tuple[index] = value`. Always fails, whatever the index.
    pub fn set_item(&self, index: isize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        tracing::debug!(index, value = %value, "rejected tuple item assignment");
        Err(SeqError::ImmutableMutation("assignment"))
    }

    /// `del tuple[index]`. Always fails, whatever the index.
    pub fn delete_item(&self, index: isize) -> Result<()> {
        tracing::debug!(index, "rejected tuple item deletion");
        Err(SeqError::ImmutableMutation("deletion"))
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        if self.items.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

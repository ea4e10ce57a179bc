//! Ordered mutable sequence

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SeqError};
use crate::sequence::slice::{resolve_index, SliceSpec};
use crate::sequence::{sort_values, Tuple};
use crate::value::Value;

/// Resizable, insertion-ordered collection of heterogeneous values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Self { items }
    }

    /// One single-character string per character of `text`
    pub fn from_chars(text: &str) -> Self {
        text.chars().map(Value::from).collect()
    }

    pub fn from_tuple(tuple: &Tuple) -> Self {
        tuple.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Element at `index`; negative indices count from the end
    pub fn get(&self, index: isize) -> Result<&Value> {
        let i = resolve_index(index, self.items.len(), "list")?;
        Ok(&self.items[i])
    }

    /// Replace the element at `index`
    pub fn set(&mut self, index: isize, value: impl Into<Value>) -> Result<()> {
        let i = resolve_index(index, self.items.len(), "list assignment")?;
        self.items[i] = value.into();
        Ok(())
    }

    /// New list holding the elements selected by `spec`
    pub fn slice(&self, spec: &SliceSpec) -> Result<List> {
        let picked = spec.indices(self.items.len())?;
        Ok(picked.into_iter().map(|i| self.items[i].clone()).collect())
    }

    pub fn append(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn extend(&mut self, other: &List) {
        self.items.extend(other.items.iter().cloned());
    }

    /// Insert before `index`, shifting later elements right. Indices past
    /// either end are clamped to that end.
    pub fn insert(&mut self, index: isize, value: impl Into<Value>) {
        let len = self.items.len() as isize;
        let at = if index < 0 { (index + len).max(0) } else { index.min(len) };
        self.items.insert(at as usize, value.into());
    }

    /// Remove the first element equal to `value`
    pub fn remove(&mut self, value: &Value) -> Result<()> {
        let i = self.index_of(value)?;
        self.items.remove(i);
        Ok(())
    }

    /// Remove and return the element at `index` (the last one by default)
    pub fn pop(&mut self, index: Option<isize>) -> Result<Value> {
        if self.items.is_empty() {
            return Err(SeqError::PopFromEmpty);
        }
        let i = resolve_index(index.unwrap_or(-1), self.items.len(), "pop")?;
        Ok(self.items.remove(i))
    }

    /// `del list[index]`
    pub fn delete(&mut self, index: isize) -> Result<()> {
        let i = resolve_index(index, self.items.len(), "list assignment")?;
        self.items.remove(i);
        Ok(())
    }

    /// `del list[start:stop:step]`
    pub fn delete_slice(&mut self, spec: &SliceSpec) -> Result<()> {
        let mut doomed = vec![false; self.items.len()];
        for i in spec.indices(self.items.len())? {
            doomed[i] = true;
        }
        let mut flags = doomed.into_iter();
        self.items.retain(|_| !flags.next().unwrap_or(false));
        Ok(())
    }

    /// Sort in place. On failure the list keeps its previous order.
    pub fn sort(&mut self, reverse: bool) -> Result<()> {
        match sort_values(&self.items, reverse) {
            Ok(sorted) => {
                self.items = sorted;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "sort left list unchanged");
                Err(e)
            }
        }
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// `a + b`
    pub fn concat(&self, other: &List) -> List {
        self.items.iter().chain(other.items.iter()).cloned().collect()
    }

    /// `a * n`
    pub fn repeat(&self, n: usize) -> List {
        std::iter::repeat(&self.items)
            .take(n)
            .flatten()
            .cloned()
            .collect()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &Value) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item == value)
            .ok_or_else(|| SeqError::ValueNotFound(value.to_string()))
    }

    /// Number of elements equal to `value`
    pub fn count_of(&self, value: &Value) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }

    pub fn unpack<const N: usize>(&self) -> Result<[Value; N]> {
        super::unpack(&self.items)
    }
}

/// New sorted list; `values` is left untouched
pub fn sorted(values: &List, reverse: bool) -> Result<List> {
    sort_values(values.as_slice(), reverse).map(List::from_values)
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_from_chars() {
        let letters = List::from_chars("Python");
        assert_eq!(letters.to_string(), "['P', 'y', 't', 'h', 'o', 'n']");
    }

    #[test]
    fn test_positive_and_negative_indexing() {
        let frutas = list!["manzana", "plátano", "cereza", "dátil"];
        assert_eq!(frutas.get(0).unwrap().plain(), "manzana");
        assert_eq!(frutas.get(2).unwrap().plain(), "cereza");
        assert_eq!(frutas.get(-1).unwrap().plain(), "dátil");
        assert_eq!(frutas.get(-2).unwrap().plain(), "cereza");
        assert!(frutas.get(4).is_err());
    }

    #[test]
    fn test_set_replaces_element() {
        let mut colores = list!["rojo", "verde", "azul"];
        colores.set(1, "amarillo").unwrap();
        assert_eq!(colores.to_string(), "['rojo', 'amarillo', 'azul']");
        assert!(colores.set(3, "negro").is_err());
    }

    #[test]
    fn test_slices_do_not_mutate() {
        let numeros: List = (0..10).map(|i| Value::Int(i * 10)).collect();
        assert_eq!(numeros.slice(&SliceSpec::range(2, 5)).unwrap().to_string(), "[20, 30, 40]");
        assert_eq!(
            numeros.slice(&SliceSpec::reversed()).unwrap().get(0).unwrap(),
            &Value::Int(90)
        );
        assert_eq!(numeros.len(), 10);
        assert_eq!(numeros.slice(&SliceSpec::full()).unwrap(), numeros);
    }

    #[test]
    fn test_append_and_insert() {
        let mut numeros = list![1, 2, 3];
        numeros.append(4);
        numeros.append(5);
        assert_eq!(numeros.to_string(), "[1, 2, 3, 4, 5]");
        numeros.insert(0, 0);
        numeros.insert(3, 99);
        assert_eq!(numeros.to_string(), "[0, 1, 2, 99, 3, 4, 5]");
        numeros.insert(100, 7);
        numeros.insert(-100, -1);
        assert_eq!(numeros.get(0).unwrap(), &Value::Int(-1));
        assert_eq!(numeros.get(-1).unwrap(), &Value::Int(7));
    }

    #[test]
    fn test_remove_first_match() {
        let mut letras = list!["a", "b", "c", "a", "d"];
        letras.remove(&Value::from("a")).unwrap();
        assert_eq!(letras.to_string(), "['b', 'c', 'a', 'd']");

        let err = letras.remove(&Value::from("z")).unwrap_err();
        assert!(matches!(err, SeqError::ValueNotFound(_)));
        assert_eq!(letras.len(), 4);
    }

    #[test]
    fn test_pop_by_index_and_default() {
        let mut valores = list![10, 20, 30, 40, 50];
        assert_eq!(valores.pop(Some(2)).unwrap(), Value::Int(30));
        assert_eq!(valores.pop(None).unwrap(), Value::Int(50));
        assert_eq!(valores.to_string(), "[10, 20, 40]");
        assert!(valores.pop(Some(9)).is_err());

        let mut empty = List::new();
        assert!(matches!(empty.pop(None), Err(SeqError::PopFromEmpty)));
    }

    #[test]
    fn test_delete_and_delete_slice() {
        let mut numeros = list![0, 1, 2, 3, 4, 5];
        numeros.delete(0).unwrap();
        assert_eq!(numeros.to_string(), "[1, 2, 3, 4, 5]");
        numeros.delete_slice(&SliceSpec::range(1, 3)).unwrap();
        assert_eq!(numeros.to_string(), "[1, 4, 5]");

        let mut stepped: List = (0..6).map(Value::Int).collect();
        stepped.delete_slice(&SliceSpec::full().with_step(2)).unwrap();
        assert_eq!(stepped.to_string(), "[1, 3, 5]");
    }

    #[test]
    fn test_sort_and_reverse() {
        let mut nums = list![54, 23, 91, 45, 12];
        nums.sort(false).unwrap();
        assert_eq!(nums.to_string(), "[12, 23, 45, 54, 91]");
        nums.sort(true).unwrap();
        assert_eq!(nums.to_string(), "[91, 54, 45, 23, 12]");

        let mut nombres = list!["Zoe", "Alex", "Maria"];
        nombres.sort(false).unwrap();
        assert_eq!(nombres.to_string(), "['Alex', 'Maria', 'Zoe']");

        let mut elementos = list![1, 2, 3, 4];
        elementos.reverse();
        assert_eq!(elementos.to_string(), "[4, 3, 2, 1]");
    }

    #[test]
    fn test_failed_sort_keeps_order() {
        let mut datos = list![1.5, "Hola", true, Value::None, 4];
        let before = datos.clone();
        assert!(datos.sort(false).is_err());
        assert_eq!(datos, before);
    }

    #[test]
    fn test_sorted_returns_new_list() {
        let original = list![30, 10, 50];
        let nueva = sorted(&original, false).unwrap();
        assert_eq!(original.to_string(), "[30, 10, 50]");
        assert_eq!(nueva.to_string(), "[10, 30, 50]");
    }

    #[test]
    fn test_concat_repeat_contains() {
        let a = list![1, 2];
        let b = list![3, 4];
        let c = a.concat(&b);
        assert_eq!(c.to_string(), "[1, 2, 3, 4]");
        assert_eq!(a.repeat(3).to_string(), "[1, 2, 1, 2, 1, 2]");
        assert!(a.repeat(0).is_empty());
        assert!(c.contains(&Value::Int(3)));
        assert!(!c.contains(&Value::Int(5)));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_index_and_count() {
        let letras = list!["a", "b", "a"];
        assert_eq!(letras.index_of(&Value::from("b")).unwrap(), 1);
        assert_eq!(letras.count_of(&Value::from("a")), 2);
        assert!(letras.index_of(&Value::from("z")).is_err());
    }

    #[test]
    fn test_display_heterogeneous() {
        let datos = list![1.5, "Hola", true, Value::None, 4];
        assert_eq!(datos.to_string(), "[1.5, 'Hola', True, None, 4]");
        assert_eq!(List::new().to_string(), "[]");
    }
}

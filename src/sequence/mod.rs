//! Ordered sequences: the mutable `List` and the fixed `Tuple`

pub mod aggregate;
pub mod list;
pub mod slice;
pub mod tuple;

pub use aggregate::{average, count, max, min, sum, Stats};
pub use list::{sorted, List};
pub use slice::{resolve_index, SliceSpec};
pub use tuple::Tuple;

use crate::error::{Result, SeqError};
use crate::value::Value;

/// Build a `List` from literal elements of mixed types.
#[macro_export]
macro_rules! list {
    ($($x:expr),* $(,)?) => {
        $crate::sequence::List::from_values(vec![$($crate::value::Value::from($x)),*])
    };
}

/// Build a `Tuple` from literal elements of mixed types.
#[macro_export]
macro_rules! tuple {
    ($($x:expr),* $(,)?) => {
        $crate::sequence::Tuple::new(vec![$($crate::value::Value::from($x)),*])
    };
}

/// Bind every element of `values` to a fixed number of targets.
pub fn unpack<const N: usize>(values: &[Value]) -> Result<[Value; N]> {
    let mismatch = SeqError::UnpackMismatch {
        expected: N,
        found: values.len(),
    };
    <[Value; N]>::try_from(values.to_vec()).map_err(|_| mismatch)
}

/// Stable sort that reports the first incomparable pair instead of
/// panicking. With `reverse`, every comparison is flipped so equal
/// elements keep their original relative order.
pub(crate) fn sort_values(values: &[Value], reverse: bool) -> Result<Vec<Value>> {
    let mut out: Vec<Value> = Vec::with_capacity(values.len());
    for item in values {
        let (mut lo, mut hi) = (0, out.len());
        while lo < hi {
            let mid = (lo + hi) / 2;
            let ord = if reverse {
                out[mid].compare(item, "<")?
            } else {
                item.compare(&out[mid], "<")?
            };
            if ord.is_lt() {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        out.insert(lo, item.clone());
    }
    Ok(out)
}

//! Seqlab - a guided walkthrough of list and tuple operations
//!
//! The crate models two sequence kinds over a tagged `Value` element: the
//! resizable [`List`] and the fixed [`Tuple`]. The [`lessons`] module walks
//! through them the way an introductory course would, recording every step
//! in a [`LessonReport`].
//!
//! # Example
//!
//! ```
//! use seqlab::{list, SliceSpec};
//!
//! let numeros = list![0, 10, 20, 30, 40];
//! let tramo = numeros.slice(&SliceSpec::range(1, 3)).unwrap();
//! assert_eq!(tramo.to_string(), "[10, 20]");
//! ```

pub mod cli;
pub mod error;
pub mod input;
pub mod lessons;
pub mod output;
pub mod sequence;
pub mod value;

pub use error::{Result, SeqError};
pub use input::{FixedWord, StdinSource, WordSource};
pub use lessons::{run_all, run_lesson, Lesson, LessonContext, LessonReport};
pub use output::{format_catalog, format_output, format_report, OutputFormat};
pub use sequence::{List, SliceSpec, Stats, Tuple};
pub use value::Value;

//! # Lazy Sequence Toolkit
//!
//! Small producers and combinators over Rust's pull-based [`Iterator`]
//! protocol. Every sequence computes its next value only when pulled and
//! carries nothing but the state needed for that step.
//!
//! ## Building blocks
//!
//! 1. **Producers** generate values from parameters: [`range`], [`count_from`], [`digits`]
//! 2. **Combinators** consume other sequences: [`zip`], [`take`], [`cumulative`],
//!    [`cumulative_with`], [`unique_lazy`]
//! 3. **Helpers** for plain numbers and reductions: [`numeric`], [`reduce`]
//!
//! All sequence types implement [`std::iter::FusedIterator`]: once a pull
//! returns `None`, every later pull returns `None` as well.
//!
//! ## Usage Example
//!
//! ```
//! use lazyseq::{count_from, cumulative, range, take, unique_lazy};
//! use lazyseq::reduce::sum;
//!
//! let evens: Vec<i64> = range(0, 8, 2)?.collect();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//! let first: Vec<u32> = take(count_from(0u32, 1), 5).collect();
//! assert_eq!(first, vec![0, 1, 2, 3, 4]);
//!
//! let running: Vec<i32> = cumulative(sum, range(1, 5, 1)?).collect();
//! assert_eq!(running, vec![1, 3, 6, 10, 15]);
//!
//! let seen: Vec<i32> = unique_lazy(vec![1, 2, 1, 3]).collect();
//! assert_eq!(seen, vec![1, 2, 3]);
//! # Ok::<(), lazyseq::SequenceError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod combinator; // Sequences built from other sequences
pub mod config;     // Output rendering configuration
pub mod number;     // Numeric kinds and stepping
pub mod numeric;    // Clamp, wrap and range checks
pub mod producer;   // Sequences built from parameters
pub mod reduce;     // Reducers and counting helpers

// Re-exports for convenience
pub use combinator::{
    cumulative, cumulative_with, take, unique_lazy, zip, Cumulative, CumulativeWith, SequenceExt,
    Take, Unique, Zip,
};
pub use config::OutputConfig;
pub use number::{Number, NumberKind, Steppable};
pub use producer::{
    count_from, count_from_number, decimal_digits, digits, range, CountFrom, Digits, Direction, Range,
};

use thiserror::Error;

/// Errors raised while constructing a sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A range between distinct bounds was given a zero step
    #[error("step must be non-zero for a range between distinct bounds")]
    ZeroStep,

    /// Range bounds that cannot be ordered (e.g. NaN)
    #[error("range bounds cannot be ordered")]
    UnorderedBounds,

    /// Start and step of a counter have different numeric kinds
    #[error("mixed numeric kinds: start is {start}, step is {step}")]
    MixedNumericKinds {
        /// Kind of the starting value
        start: NumberKind,
        /// Kind of the step value
        step: NumberKind,
    },

    /// Digit extraction only accepts non-negative numbers
    #[error("cannot take digits of a negative number")]
    NegativeNumber,

    /// Digit extraction needs a base of at least 2
    #[error("invalid base {0}: base must be at least 2")]
    InvalidBase(String),

    /// Lower bound greater than upper bound
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvalidBounds {
        /// Lower bound as given
        min: String,
        /// Upper bound as given
        max: String,
    },
}

//! Producers: sequences generated from parameters alone
//!
//! None of these hold an upstream sequence. Each owns only the cursor state
//! needed to compute its next value.

mod count;
mod digits;
mod range;

pub use count::{count_from, count_from_number, CountFrom};
pub use digits::{decimal_digits, digits, Digits};
pub use range::{range, Direction, Range};

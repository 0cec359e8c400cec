//! Digit extraction, least significant first

use std::fmt::Display;
use std::iter::FusedIterator;

use num_integer::Integer;
use num_traits::FromPrimitive;

use crate::SequenceError;

/// Digits of a non-negative number in a given base
#[derive(Debug, Clone)]
pub struct Digits<T> {
    remaining: Option<T>,
    base: T,
}

/// Digits of `number` in `base`, least significant first
///
/// Zero has the single digit `0`. Negative numbers and bases below 2 are
/// rejected. Only integer types are accepted, so every digit `d` satisfies
/// `0 <= d < base`.
///
/// ```
/// use lazyseq::digits;
///
/// assert_eq!(digits(39u32, 2)?.collect::<Vec<_>>(), vec![1, 1, 1, 0, 0, 1]);
/// # Ok::<(), lazyseq::SequenceError>(())
/// ```
pub fn digits<T>(number: T, base: T) -> Result<Digits<T>, SequenceError>
where
    T: Integer + Clone + Display,
{
    if base < T::one() + T::one() {
        return Err(SequenceError::InvalidBase(base.to_string()));
    }
    if number < T::zero() {
        return Err(SequenceError::NegativeNumber);
    }

    Ok(Digits {
        remaining: Some(number),
        base,
    })
}

/// Base-10 digits of `number`, least significant first
pub fn decimal_digits<T>(number: T) -> Result<Digits<T>, SequenceError>
where
    T: Integer + Clone + Display + FromPrimitive,
{
    let ten = T::from_u8(10).ok_or_else(|| SequenceError::InvalidBase("10".to_string()))?;
    digits(number, ten)
}

impl<T> Iterator for Digits<T>
where
    T: Integer + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let number = self.remaining.take()?;
        let (rest, digit) = Integer::div_rem(&number, &self.base);
        if rest > T::zero() {
            self.remaining = Some(rest);
        }
        Some(digit)
    }
}

impl<T> FusedIterator for Digits<T> where T: Integer + Clone {}

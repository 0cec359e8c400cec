//! Numeric helpers: clamping, wrapping and range checks

use std::fmt::Display;

use num_traits::{Num, ToPrimitive};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::SequenceError;

/// Clamp `value` into `[min, max]`
///
/// When `min > max`, `min` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let capped = if value > max { max } else { value };
    if capped < min {
        min
    } else {
        capped
    }
}

/// Wrap `value` into `[min, max)`, so overflowing `max` lands back on `min`
///
/// Returns `min` when `min == max`.
pub fn wrap<T: Num + PartialOrd + Copy>(value: T, min: T, max: T) -> T {
    if max == min {
        return min;
    }
    let span = max - min;
    let mut offset = (value + max) % span;
    // remainder keeps the dividend's sign
    if offset < T::zero() && span > T::zero() {
        offset = offset + span;
    }
    offset + min
}

/// Whether `min <= value <= max`
///
/// A non-zero `step` (sign ignored) also requires `value` to sit an
/// integral number of steps above `min`.
pub fn within_range<T: Num + PartialOrd + Copy>(value: T, min: T, max: T, step: T) -> bool {
    let step = if step < T::zero() { T::zero() - step } else { step };
    value >= min && value <= max && (step == T::zero() || (value - min) % step == T::zero())
}

/// Whether `value` is an integer that fits in an unsigned byte
pub fn is_byte<T: ToPrimitive>(value: T) -> bool {
    value
        .to_f64()
        .is_some_and(|value| within_range(value, 0.0, 255.0, 1.0))
}

/// Uniform random integer in `[min, max]`, drawn from a caller-owned RNG
pub fn rand_int<T, R>(rng: &mut R, min: T, max: T) -> Result<T, SequenceError>
where
    T: SampleUniform + PartialOrd + Display,
    R: Rng,
{
    if min > max {
        return Err(SequenceError::InvalidBounds {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(rng.gen_range(min..=max))
}

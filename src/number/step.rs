//! Overflow-aware stepping for sequence values

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use super::Number;
use crate::SequenceError;

/// A value that can be advanced by a step without silently overflowing
///
/// `checked_forward` and `checked_backward` return `None` when the result
/// would not be representable; producers treat that as exhaustion.
pub trait Steppable: Clone + PartialOrd {
    /// Absolute value, used to normalize range steps
    ///
    /// Signed primitives saturate: the magnitude of `MIN` is `MAX`, one
    /// short of the true absolute value.
    fn magnitude(&self) -> Self;

    /// Whether this step would never advance (NaN counts as zero)
    fn is_zero_step(&self) -> bool;

    /// `self + step`, or `None` on overflow
    fn checked_forward(&self, step: &Self) -> Option<Self>;

    /// `self - step`, or `None` on overflow
    fn checked_backward(&self, step: &Self) -> Option<Self>;

    /// Reject a step that cannot be applied to this value
    ///
    /// Only runtime-typed values can disagree; statically typed ones always
    /// accept.
    fn check_step(&self, _step: &Self) -> Result<(), SequenceError> {
        Ok(())
    }
}

macro_rules! impl_steppable_signed {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                #[inline]
                fn magnitude(&self) -> Self {
                    <$t>::saturating_abs(*self)
                }

                #[inline]
                fn is_zero_step(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn checked_forward(&self, step: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *step)
                }

                #[inline]
                fn checked_backward(&self, step: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *step)
                }
            }
        )*
    };
}

macro_rules! impl_steppable_unsigned {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                #[inline]
                fn magnitude(&self) -> Self {
                    *self
                }

                #[inline]
                fn is_zero_step(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn checked_forward(&self, step: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *step)
                }

                #[inline]
                fn checked_backward(&self, step: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *step)
                }
            }
        )*
    };
}

macro_rules! impl_steppable_float {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                #[inline]
                fn magnitude(&self) -> Self {
                    <$t>::abs(*self)
                }

                #[inline]
                fn is_zero_step(&self) -> bool {
                    !(<$t>::abs(*self) > 0.0)
                }

                #[inline]
                fn checked_forward(&self, step: &Self) -> Option<Self> {
                    let next = *self + *step;
                    next.is_finite().then_some(next)
                }

                #[inline]
                fn checked_backward(&self, step: &Self) -> Option<Self> {
                    let next = *self - *step;
                    next.is_finite().then_some(next)
                }
            }
        )*
    };
}

impl_steppable_signed!(i8, i16, i32, i64, i128, isize);
impl_steppable_unsigned!(u8, u16, u32, u64, u128, usize);
impl_steppable_float!(f32, f64);

impl Steppable for BigInt {
    fn magnitude(&self) -> Self {
        Signed::abs(self)
    }

    fn is_zero_step(&self) -> bool {
        Zero::is_zero(self)
    }

    fn checked_forward(&self, step: &Self) -> Option<Self> {
        Some(self + step)
    }

    fn checked_backward(&self, step: &Self) -> Option<Self> {
        Some(self - step)
    }
}

impl Steppable for BigUint {
    fn magnitude(&self) -> Self {
        self.clone()
    }

    fn is_zero_step(&self) -> bool {
        Zero::is_zero(self)
    }

    fn checked_forward(&self, step: &Self) -> Option<Self> {
        Some(self + step)
    }

    fn checked_backward(&self, step: &Self) -> Option<Self> {
        (step <= self).then(|| self - step)
    }
}

// Stepping across kinds is refused; constructors call `check_step` first.
impl Steppable for Number {
    fn magnitude(&self) -> Self {
        match self {
            Number::Fixed(value) => Number::Fixed(Steppable::magnitude(value)),
            Number::Big(value) => Number::Big(Steppable::magnitude(value)),
        }
    }

    fn is_zero_step(&self) -> bool {
        match self {
            Number::Fixed(value) => Steppable::is_zero_step(value),
            Number::Big(value) => Steppable::is_zero_step(value),
        }
    }

    fn checked_forward(&self, step: &Self) -> Option<Self> {
        match (self, step) {
            (Number::Fixed(a), Number::Fixed(b)) => {
                Steppable::checked_forward(a, b).map(Number::Fixed)
            }
            (Number::Big(a), Number::Big(b)) => Steppable::checked_forward(a, b).map(Number::Big),
            _ => None,
        }
    }

    fn checked_backward(&self, step: &Self) -> Option<Self> {
        match (self, step) {
            (Number::Fixed(a), Number::Fixed(b)) => {
                Steppable::checked_backward(a, b).map(Number::Fixed)
            }
            (Number::Big(a), Number::Big(b)) => Steppable::checked_backward(a, b).map(Number::Big),
            _ => None,
        }
    }

    fn check_step(&self, step: &Self) -> Result<(), SequenceError> {
        if self.kind() != step.kind() {
            return Err(SequenceError::MixedNumericKinds {
                start: self.kind(),
                step: step.kind(),
            });
        }
        Ok(())
    }
}

//! Unbounded counters

use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::number::{Number, Steppable};
use crate::SequenceError;

/// Counts from a start value by a fixed step, without end
///
/// The counter only stops if the next value cannot be represented in `T`;
/// for arbitrary-precision types it never stops. Bound it with
/// [`take`](crate::take).
#[derive(Debug, Clone)]
pub struct CountFrom<T> {
    current: Option<T>,
    step: T,
}

/// Count forever from `start`, advancing by `step` on every pull
///
/// A negative step counts downwards.
///
/// ```
/// use lazyseq::{count_from, take};
///
/// let values: Vec<i32> = take(count_from(100, -10), 3).collect();
/// assert_eq!(values, vec![100, 90, 80]);
/// ```
pub fn count_from<T: Steppable>(start: T, step: T) -> CountFrom<T> {
    CountFrom {
        current: Some(start),
        step,
    }
}

/// Count from a runtime-typed [`Number`]
///
/// The kind of `start` fixes the kind of every value. A `step` of a
/// different kind is rejected here, before any value is pulled.
pub fn count_from_number(start: Number, step: Number) -> Result<CountFrom<Number>, SequenceError> {
    start.check_step(&step)?;
    debug!(kind = %start.kind(), "counter created");
    Ok(count_from(start, step))
}

impl<T: Steppable> Iterator for CountFrom<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;
        self.current = current.checked_forward(&self.step);
        if self.current.is_none() {
            warn!("counter reached the limit of its numeric type and stopped");
        }
        Some(current)
    }

    // fixed-precision counters end at overflow, so no lower bound is promised
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T: Steppable> FusedIterator for CountFrom<T> {}

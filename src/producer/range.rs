//! Inclusive numeric ranges with inferred direction

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tracing::debug;

use crate::number::Steppable;
use crate::SequenceError;

/// Direction a [`Range`] walks in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `start < end`: add the step
    Ascending,
    /// `start > end`: subtract the step
    Descending,
    /// `start == end`: a single value
    Single,
}

/// Inclusive range from `start` towards `end`
///
/// Values beyond `end` are never produced. If `end` is not an exact step
/// multiple away from `start`, the last value is the closest one short of it.
#[derive(Debug, Clone)]
pub struct Range<T> {
    current: Option<T>,
    end: T,
    step: T,
    direction: Direction,
}

/// Build an inclusive range from `start` to `end`
///
/// The step is normalized to its absolute value; direction comes from the
/// bounds. A zero step is only accepted when `start == end`. For
/// runtime-typed values the step must have the same kind as `start`.
///
/// ```
/// use lazyseq::range;
///
/// assert_eq!(range(1, 7, 2)?.collect::<Vec<_>>(), vec![1, 3, 5, 7]);
/// assert_eq!(range(1, -1, -1)?.collect::<Vec<_>>(), vec![1, 0, -1]);
/// # Ok::<(), lazyseq::SequenceError>(())
/// ```
pub fn range<T: Steppable>(start: T, end: T, step: T) -> Result<Range<T>, SequenceError> {
    start.check_step(&step)?;
    let step = step.magnitude();
    let direction = match start.partial_cmp(&end) {
        Some(Ordering::Equal) => Direction::Single,
        Some(Ordering::Less) => Direction::Ascending,
        Some(Ordering::Greater) => Direction::Descending,
        None => return Err(SequenceError::UnorderedBounds),
    };

    if direction != Direction::Single && step.is_zero_step() {
        return Err(SequenceError::ZeroStep);
    }

    debug!(?direction, "range created");

    Ok(Range {
        current: Some(start),
        end,
        step,
        direction,
    })
}

impl<T: Steppable> Range<T> {
    /// Direction inferred from the bounds
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T: Steppable> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.current.take()?;

        self.current = match self.direction {
            Direction::Ascending => current
                .checked_forward(&self.step)
                .filter(|next| *next <= self.end),
            Direction::Descending => current
                .checked_backward(&self.step)
                .filter(|next| *next >= self.end),
            Direction::Single => None,
        };

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.current, self.direction) {
            (None, _) => (0, Some(0)),
            (Some(_), Direction::Single) => (1, Some(1)),
            (Some(_), _) => (1, None),
        }
    }
}

impl<T: Steppable> FusedIterator for Range<T> {}

//! Bounded prefix of a sequence

use std::iter::FusedIterator;

/// At most `amount` values from the front of a sequence
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

/// Yield no more than `amount` values from `sequence`
///
/// The source is never pulled once the budget is spent, so the value after
/// the last one taken is not consumed. Counts are unsigned; there is no
/// negative amount.
pub fn take<S: IntoIterator>(sequence: S, amount: usize) -> Take<S::IntoIter> {
    Take {
        iter: sequence.into_iter(),
        remaining: amount,
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let lower = lower.min(self.remaining);
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower, Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

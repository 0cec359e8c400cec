//! Running folds

use std::fmt;
use std::iter::{Fuse, FusedIterator};

/// Running fold seeded by the first source value
///
/// Output length equals source length.
pub struct Cumulative<I: Iterator, F> {
    iter: Fuse<I>,
    acc: Option<I::Item>,
    reducer: F,
}

/// Running fold seeded by an explicit initial value
///
/// The initial value is not emitted; the first output is
/// `reducer(init, first)`.
pub struct CumulativeWith<I, F, A> {
    iter: I,
    acc: Option<A>,
    reducer: F,
}

/// Running fold where the first source value starts the accumulator
///
/// ```
/// use lazyseq::cumulative;
///
/// let running: Vec<i32> = cumulative(|acc, n| acc * n, vec![1, 2, 3, 4, 5]).collect();
/// assert_eq!(running, vec![1, 2, 6, 24, 120]);
/// ```
pub fn cumulative<S, F>(reducer: F, sequence: S) -> Cumulative<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Cumulative {
        iter: sequence.into_iter().fuse(),
        acc: None,
        reducer,
    }
}

/// Running fold starting from `init`, which is not itself emitted
pub fn cumulative_with<S, F, A>(reducer: F, sequence: S, init: A) -> CumulativeWith<S::IntoIter, F, A>
where
    S: IntoIterator,
    A: Clone,
    F: FnMut(A, S::Item) -> A,
{
    CumulativeWith {
        iter: sequence.into_iter(),
        acc: Some(init),
        reducer,
    }
}

impl<I, F> Iterator for Cumulative<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let value = self.iter.next()?;
        let next = match self.acc.take() {
            Some(acc) => (self.reducer)(acc, value),
            None => value,
        };
        self.acc = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Cumulative<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

impl<I, F, A> Iterator for CumulativeWith<I, F, A>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        // the accumulator is dropped for good once the source runs dry
        let acc = self.acc.take()?;
        let value = self.iter.next()?;
        let next = (self.reducer)(acc, value);
        self.acc = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.acc {
            Some(_) => self.iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I, F, A> FusedIterator for CumulativeWith<I, F, A>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
}

impl<I, F> fmt::Debug for Cumulative<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cumulative")
            .field("iter", &self.iter)
            .field("acc", &self.acc)
            .finish_non_exhaustive()
    }
}

impl<I: fmt::Debug, F, A: fmt::Debug> fmt::Debug for CumulativeWith<I, F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CumulativeWith")
            .field("iter", &self.iter)
            .field("acc", &self.acc)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::{prod, sum};
    use crate::range;

    #[test]
    fn test_without_init() {
        let values: Vec<i32> = cumulative(sum, vec![1, 2, 3, 4, 5]).collect();
        assert_eq!(values, vec![1, 3, 6, 10, 15]);
    }

    #[test]
    fn test_with_init_is_not_emitted() {
        let values: Vec<i32> = cumulative_with(sum, vec![1, 2, 3, 4, 5], 0).collect();
        assert_eq!(values, vec![1, 3, 6, 10, 15]);

        let values: Vec<i32> = cumulative_with(sum, vec![1, 2, 3], 100).collect();
        assert_eq!(values, vec![101, 103, 106]);
    }

    #[test]
    fn test_over_range() {
        let values: Vec<i64> = cumulative(prod, range(1, 5, 1).unwrap()).collect();
        assert_eq!(values, vec![1, 2, 6, 24, 120]);
    }

    #[test]
    fn test_empty_source() {
        let mut values = cumulative(sum, Vec::<i32>::new());
        assert_eq!(values.next(), None);

        let mut values = cumulative_with(sum, Vec::<i32>::new(), 7);
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
    }

    #[test]
    fn test_stays_exhausted_over_resuming_source() {
        let mut flip = false;
        let source = std::iter::from_fn(move || {
            flip = !flip;
            flip.then_some(1)
        });
        let mut values = cumulative_with(sum, source, 0);
        assert_eq!(values.next(), Some(1));
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
    }
}

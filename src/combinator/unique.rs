//! First-occurrence filtering

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Fuse, FusedIterator};

/// Sub-sequence of first occurrences, in first-seen order
///
/// Every distinct value is remembered for the life of the sequence, so
/// memory grows with the number of distinct values pulled.
#[derive(Debug, Clone)]
pub struct Unique<I: Iterator> {
    iter: Fuse<I>,
    seen: HashSet<I::Item>,
}

/// Skip values that were already produced
///
/// Over an endless source this never finishes once the source stops
/// producing new values; bound it with [`take`](crate::take).
pub fn unique_lazy<S>(sequence: S) -> Unique<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    Unique {
        iter: sequence.into_iter().fuse(),
        seen: HashSet::new(),
    }
}

impl<I> Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    /// Number of distinct values produced so far
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let seen = &mut self.seen;
        self.iter.find(|value| seen.insert(value.clone()))
    }

    // only the very first pull is guaranteed to be new
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = if self.seen.is_empty() { lower.min(1) } else { 0 };
        (lower, upper)
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_from, take};

    #[test]
    fn test_first_seen_order() {
        let values: Vec<i32> = unique_lazy(vec![1, 2, 1, 3, 1, 4, 1, 5]).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_strings() {
        let values: Vec<&str> = unique_lazy("a b a c b".split(' ')).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_endless_source_with_take() {
        let mut values = unique_lazy(count_from(0u64, 1).map(|n| n / 3));
        let first: Vec<u64> = take(values.by_ref(), 4).collect();
        assert_eq!(first, vec![0, 1, 2, 3]);
        assert_eq!(values.seen_len(), 4);
    }

    #[test]
    fn test_hint_after_repeats() {
        let mut values = unique_lazy(vec![7, 7, 7]);
        assert_eq!(values.size_hint(), (1, Some(3)));
        assert_eq!(values.next(), Some(7));
        assert_eq!(values.size_hint(), (0, Some(2)));
        assert_eq!(values.next(), None);
    }
}

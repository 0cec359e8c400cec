//! Lock-step iteration over N materialized sequences

use std::iter::FusedIterator;

/// Rows of one value from each input, up to the shortest input's length
#[derive(Debug, Clone)]
pub struct Zip<I> {
    iters: Vec<I>,
    remaining: usize,
}

/// Zip any number of sized sequences into rows
///
/// The output length is the minimum input length, computed up front.
/// Mismatched lengths are truncated silently; no inputs yields no rows.
///
/// ```
/// use lazyseq::zip;
///
/// let rows: Vec<Vec<i32>> = zip(vec![vec![1, 2, 3], vec![4, 5, 6, 7]]).collect();
/// assert_eq!(rows, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn zip<C, S>(sequences: C) -> Zip<S::IntoIter>
where
    C: IntoIterator<Item = S>,
    S: IntoIterator,
    S::IntoIter: ExactSizeIterator,
{
    let iters: Vec<S::IntoIter> = sequences.into_iter().map(IntoIterator::into_iter).collect();
    let remaining = iters.iter().map(ExactSizeIterator::len).min().unwrap_or(0);
    Zip { iters, remaining }
}

impl<I: Iterator> Iterator for Zip<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let row = self.iters.iter_mut().map(Iterator::next).collect::<Option<Vec<_>>>();
        if row.is_none() {
            // an input reported more items than it had
            self.remaining = 0;
        }
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator> ExactSizeIterator for Zip<I> {}

impl<I: Iterator> FusedIterator for Zip<I> {}

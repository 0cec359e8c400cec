//! Combinators: sequences derived from other sequences
//!
//! Every combinator takes its input by value and becomes its only consumer.
//! All of them stay exhausted once they return `None`, even if the wrapped
//! iterator would produce more.

mod cumulative;
mod take;
mod unique;
mod zip;

pub use cumulative::{cumulative, cumulative_with, Cumulative, CumulativeWith};
pub use take::{take, Take};
pub use unique::{unique_lazy, Unique};
pub use zip::{zip, Zip};

use std::hash::Hash;

/// Method-call access to the combinators for any iterator
pub trait SequenceExt: Iterator + Sized {
    /// See [`take`]
    fn take_at_most(self, amount: usize) -> Take<Self> {
        take(self, amount)
    }

    /// See [`cumulative`]
    fn cumulative<F>(self, reducer: F) -> Cumulative<Self, F>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
        Self::Item: Clone,
    {
        cumulative(reducer, self)
    }

    /// See [`cumulative_with`]
    fn cumulative_with<A, F>(self, init: A, reducer: F) -> CumulativeWith<Self, F, A>
    where
        F: FnMut(A, Self::Item) -> A,
        A: Clone,
    {
        cumulative_with(reducer, self, init)
    }

    /// See [`unique_lazy`]
    fn unique_lazy(self) -> Unique<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        unique_lazy(self)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_from, range};

    #[test]
    fn test_method_chain() {
        // unique_lazy over an endless source with four distinct values would
        // never finish, so the source is bounded first
        let values: Vec<u32> = count_from(0u32, 1)
            .map(|n| n % 4)
            .take_at_most(12)
            .unique_lazy()
            .cumulative(|acc, n| acc + n)
            .collect();
        assert_eq!(values, vec![0, 1, 3, 6]);
    }

    #[test]
    fn test_cumulative_with_method() {
        let values: Vec<String> = range(1, 3, 1)
            .unwrap()
            .cumulative_with(String::new(), |mut acc, n: i32| {
                acc.push_str(&n.to_string());
                acc
            })
            .collect();
        assert_eq!(values, vec!["1", "12", "123"]);
    }
}

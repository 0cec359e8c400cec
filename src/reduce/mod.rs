//! Reducers and counting helpers
//!
//! `sum` and `prod` are plain binary functions so they slot into
//! [`Iterator::fold`], [`Iterator::reduce`] and [`cumulative`](crate::cumulative).

use std::hash::Hash;
use std::ops::{Add, Mul};

use num_traits::{One, Zero};

use crate::combinator::unique_lazy;

/// Binary sum reducer
#[inline]
pub fn sum<T: Add<Output = T>>(acc: T, value: T) -> T {
    acc + value
}

/// Binary product reducer
#[inline]
pub fn prod<T: Mul<Output = T>>(acc: T, value: T) -> T {
    acc * value
}

/// A value or an arbitrarily nested list of values
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// Leaf value
    Value(T),
    /// Nested list
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Value(value)
    }
}

/// Sum of every leaf in a nested list; empty lists add zero
pub fn sum_all<T: Zero + Clone>(items: &[Nested<T>]) -> T {
    items.iter().fold(T::zero(), |acc, item| match item {
        Nested::Value(value) => acc + value.clone(),
        Nested::List(list) => acc + sum_all(list),
    })
}

/// Product of every leaf in a nested list; empty lists multiply by one
pub fn prod_all<T: One + Clone>(items: &[Nested<T>]) -> T {
    items.iter().fold(T::one(), |acc, item| match item {
        Nested::Value(value) => acc * value.clone(),
        Nested::List(list) => acc * prod_all(list),
    })
}

/// Number of values for which `predicate` holds
pub fn count_where<S, P>(sequence: S, mut predicate: P) -> usize
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    sequence.into_iter().filter(|value| predicate(value)).count()
}

/// Number of values equal to `target`
pub fn count_eq<S, T>(sequence: S, target: &T) -> usize
where
    S: IntoIterator,
    S::Item: PartialEq<T>,
{
    count_where(sequence, |value| value == target)
}

/// Number of values that differ from their type's default (`false`, `0`, `""`)
pub fn count_truthy<S>(sequence: S) -> usize
where
    S: IntoIterator,
    S::Item: Default + PartialEq,
{
    let empty = S::Item::default();
    count_where(sequence, |value| *value != empty)
}

/// Eager first-occurrence filter
pub fn unique<S>(sequence: S) -> Vec<S::Item>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    unique_lazy(sequence).collect()
}

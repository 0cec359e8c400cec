//! Shared helpers for sequence tests

#![allow(dead_code)]

use std::fmt::Debug;

/// Iterator that yields its items, then `None`, then starts over
///
/// Used to check that wrappers stay exhausted even when their source
/// would resume.
pub struct Resuming<T: Clone> {
    items: Vec<T>,
    pos: usize,
}

impl<T: Clone> Resuming<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, pos: 0 }
    }
}

impl<T: Clone> Iterator for Resuming<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos == self.items.len() {
            self.pos = 0;
            return None;
        }
        let item = self.items[self.pos].clone();
        self.pos += 1;
        Some(item)
    }
}

/// Drain `sequence`, then check that further pulls keep returning `None`
pub fn drain_and_check_exhausted<I>(mut sequence: I) -> Vec<I::Item>
where
    I: Iterator,
    I::Item: Debug,
{
    let values: Vec<I::Item> = sequence.by_ref().collect();
    for _ in 0..3 {
        assert!(
            sequence.next().is_none(),
            "exhausted sequence produced another value"
        );
    }
    values
}

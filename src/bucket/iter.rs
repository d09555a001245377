//! Pop-order traversal.
//!
//! Both iterators walk buckets from the highest priority to the lowest and,
//! inside a bucket, from oldest to newest. That is exactly the sequence
//! repeated calls to `pop` would produce.

use std::collections::{btree_map, vec_deque, BTreeMap, VecDeque};
use std::iter::{FusedIterator, Rev};

use super::types::Priority;

/// Borrowing iterator over a queue in pop order.
///
/// Created by [`PriorityQueue::iter`](super::PriorityQueue::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    buckets: Rev<btree_map::Values<'a, Priority, VecDeque<T>>>,
    current: Option<vec_deque::Iter<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(buckets: &'a BTreeMap<Priority, VecDeque<T>>, len: usize) -> Self {
        Self {
            buckets: buckets.values().rev(),
            current: None,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(value);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that yields elements in pop order.
///
/// Created by [`PriorityQueue::drain`](super::PriorityQueue::drain) or by
/// `into_iter()` on a queue.
#[derive(Debug)]
pub struct IntoIter<T> {
    buckets: BTreeMap<Priority, VecDeque<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(buckets: BTreeMap<Priority, VecDeque<T>>, len: usize) -> Self {
        Self {
            buckets,
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut entry = self.buckets.last_entry()?;
        let value = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if value.is_some() {
            self.remaining -= 1;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<Priority, VecDeque<&'static str>> {
        let mut buckets = BTreeMap::new();
        buckets.insert(1, VecDeque::from(vec!["c1", "d1"]));
        buckets.insert(2, VecDeque::from(vec!["b1", "e1"]));
        buckets.insert(3, VecDeque::from(vec!["a1"]));
        buckets
    }

    #[test]
    fn test_iter_pop_order() {
        let buckets = sample();
        let seen: Vec<_> = Iter::new(&buckets, 5).copied().collect();
        assert_eq!(seen, vec!["a1", "b1", "e1", "c1", "d1"]);
    }

    #[test]
    fn test_iter_exact_size() {
        let buckets = sample();
        let mut iter = Iter::new(&buckets, 5);
        assert_eq!(iter.len(), 5);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_empty() {
        let buckets: BTreeMap<Priority, VecDeque<u32>> = BTreeMap::new();
        assert_eq!(Iter::new(&buckets, 0).next(), None);
    }

    #[test]
    fn test_into_iter_consumes_in_pop_order() {
        let mut iter = IntoIter::new(sample(), 5);
        assert_eq!(iter.next(), Some("a1"));
        assert_eq!(iter.len(), 4);
        let rest: Vec<_> = iter.collect();
        assert_eq!(rest, vec!["b1", "e1", "c1", "d1"]);
    }
}

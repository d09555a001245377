//! Bucketed priority queue.
//!
//! # Structure
//!
//! Elements live in per-priority buckets:
//!
//! ```text
//! BTreeMap<Priority, VecDeque<T>>
//!
//!   1 -> [c1, d1]
//!   2 -> [b1, e1]      pop() takes the front of the last (highest) bucket
//!   3 -> [a1]
//! ```
//!
//! The map keeps priorities sorted, so the highest tier is `last_entry()` and
//! ascending/descending views need no per-call sort. Each `VecDeque` gives
//! O(1) amortized append and pop-front, preserving FIFO order inside a tier.
//!
//! Invariants held after every public call:
//! - no bucket is empty (an emptied bucket is removed from the map at once)
//! - `len` equals the sum of all bucket lengths

use std::collections::{BTreeMap, VecDeque};
use std::mem;

use super::config::QueueConfig;
use super::iter::{IntoIter, Iter};
use super::types::{Priority, ScanOrder};

/// A priority queue with integer priorities and FIFO order within a priority.
///
/// Higher priority values are served first. Among elements of equal
/// priority, the one added earliest is served first.
///
/// # Examples
///
/// ```
/// use u_pqueue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.add("low", 1);
/// queue.add("high", 5);
/// queue.add("high again", 5);
///
/// assert_eq!(queue.pop(), Some("high"));
/// assert_eq!(queue.pop(), Some("high again"));
/// assert_eq!(queue.pop(), Some("low"));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    buckets: BTreeMap<Priority, VecDeque<T>>,
    len: usize,
    config: QueueConfig,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue with the given configuration.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this queue was built with.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Appends `value` to the back of the bucket for `priority`.
    ///
    /// The bucket is created if absent. Duplicate values are allowed and
    /// tracked as separate entries.
    pub fn add(&mut self, value: T, priority: Priority) {
        let capacity = self.config.bucket_capacity;
        self.buckets
            .entry(priority)
            .or_insert_with(|| {
                tracing::trace!(priority, "created bucket");
                VecDeque::with_capacity(capacity)
            })
            .push_back(value);
        self.len += 1;
    }

    /// Removes and returns the oldest element of the highest priority.
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(_, value)| value)
    }

    /// Like [`pop`](Self::pop), but also returns the element's priority.
    pub fn pop_with_priority(&mut self) -> Option<(Priority, T)> {
        let Some(mut entry) = self.buckets.last_entry() else {
            tracing::trace!("pop on empty queue");
            return None;
        };

        let priority = *entry.key();
        let value = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
            tracing::trace!(priority, "removed empty bucket");
        }
        self.len -= 1;

        Some((priority, value))
    }

    /// Returns the element [`pop`](Self::pop) would return, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.buckets.values().next_back().and_then(VecDeque::front)
    }

    /// Returns the highest priority currently present.
    pub fn peek_priority(&self) -> Option<Priority> {
        self.buckets.keys().next_back().copied()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements queued at `priority`.
    pub fn bucket_len(&self, priority: Priority) -> usize {
        self.buckets.get(&priority).map_or(0, VecDeque::len)
    }

    /// Returns every non-empty priority level, lowest first.
    pub fn get_all_priorities(&self) -> Vec<Priority> {
        self.buckets.keys().copied().collect()
    }

    /// Iterates over all elements in pop order without consuming them.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buckets, self.len)
    }

    /// Calls `f` once per element, in pop order. The queue is not modified.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    /// Removes all elements, returning them in pop order.
    ///
    /// The queue is empty as soon as this returns, whether or not the
    /// iterator is consumed.
    pub fn drain(&mut self) -> IntoIter<T> {
        let len = mem::take(&mut self.len);
        IntoIter::new(mem::take(&mut self.buckets), len)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    /// Moves the first element equal to `value` to `new_priority`.
    ///
    /// Buckets are searched in the configured [`ScanOrder`] (ascending by
    /// default), oldest to newest within each bucket. The element found is
    /// removed and re-added through [`add`](Self::add), so it becomes the
    /// newest element of its new bucket, even when `new_priority` equals its
    /// current priority.
    ///
    /// Returns `false`, leaving the queue untouched, if no element matches.
    pub fn change_priority<Q>(&mut self, value: &Q, new_priority: Priority) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let Some((priority, index)) = self.locate(value) else {
            tracing::trace!(new_priority, "change_priority: value not found");
            return false;
        };
        let Some(bucket) = self.buckets.get_mut(&priority) else {
            return false;
        };
        let Some(element) = bucket.remove(index) else {
            return false;
        };
        if bucket.is_empty() {
            self.buckets.remove(&priority);
            tracing::trace!(priority, "removed empty bucket");
        }
        self.len -= 1;

        tracing::trace!(from = priority, to = new_priority, "changed priority");
        self.add(element, new_priority);
        true
    }

    /// Returns the priority of the first element equal to `value`.
    ///
    /// Uses the same search order as [`change_priority`](Self::change_priority).
    pub fn priority_of<Q>(&self, value: &Q) -> Option<Priority>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.locate(value).map(|(priority, _)| priority)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.locate(value).is_some()
    }

    /// Finds the bucket key and in-bucket index of the first match.
    fn locate<Q>(&self, value: &Q) -> Option<(Priority, usize)>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let find = |(&priority, bucket): (&Priority, &VecDeque<T>)| {
            bucket
                .iter()
                .position(|element| element == value)
                .map(|index| (priority, index))
        };

        match self.config.scan_order {
            ScanOrder::Ascending => self.buckets.iter().find_map(find),
            ScanOrder::Descending => self.buckets.iter().rev().find_map(find),
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(T, Priority)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.add(value, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.buckets, self.len)
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::{BTreeMap, VecDeque};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::PriorityQueue;
    use crate::bucket::config::QueueConfig;
    use crate::bucket::types::Priority;

    #[derive(Serialize)]
    struct QueueRef<'a, T> {
        config: &'a QueueConfig,
        buckets: &'a BTreeMap<Priority, VecDeque<T>>,
    }

    #[derive(Deserialize)]
    struct QueueRepr<T> {
        config: QueueConfig,
        buckets: BTreeMap<Priority, VecDeque<T>>,
    }

    impl<T: Serialize> Serialize for PriorityQueue<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            QueueRef {
                config: &self.config,
                buckets: &self.buckets,
            }
            .serialize(serializer)
        }
    }

    // The element count is derived, and empty buckets are dropped on input.
    impl<'de, T: Deserialize<'de>> Deserialize<'de> for PriorityQueue<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let QueueRepr {
                config,
                mut buckets,
            } = QueueRepr::deserialize(deserializer)?;
            buckets.retain(|_, bucket| !bucket.is_empty());
            let len = buckets.values().map(VecDeque::len).sum();

            Ok(Self {
                buckets,
                len,
                config,
            })
        }
    }
}

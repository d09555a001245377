//! Core types shared by the queue and its configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A priority level. Higher values are served first.
///
/// Any `i64` is accepted, which covers the full `i32` range callers
/// typically use.
pub type Priority = i64;

/// Order in which buckets are scanned when searching for an element by value.
///
/// Used by [`PriorityQueue::change_priority`](super::PriorityQueue::change_priority),
/// [`PriorityQueue::priority_of`](super::PriorityQueue::priority_of) and
/// [`PriorityQueue::contains`](super::PriorityQueue::contains). Inside a bucket
/// the scan always runs oldest to newest; this only picks the bucket order,
/// which decides which of several equal elements is found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanOrder {
    /// Lowest priority bucket first.
    #[default]
    Ascending,

    /// Highest priority bucket first, i.e. the order `pop` would reach them.
    Descending,
}

//! Tiered priority queue.
//!
//! Elements are grouped into buckets, one per integer priority level.
//! The highest level is served first; inside a level, elements are served
//! in insertion order (FIFO). An element can be moved to another level with
//! [`PriorityQueue::change_priority`], which places it at the back of its new
//! bucket.
//!
//! # Design
//!
//! Buckets are stored in an ordered map keyed by priority, so listing the
//! levels and walking them from the top never requires re-sorting. No
//! capacity bound, eviction, or locking is provided; wrap the queue in a
//! mutex to share it between threads.

mod config;
mod iter;
mod queue;
mod types;

pub use config::QueueConfig;
pub use iter::{IntoIter, Iter};
pub use queue::PriorityQueue;
pub use types::{Priority, ScanOrder};

//! Priority queue with integer priority levels and FIFO tie-breaking.
//!
//! Provides [`PriorityQueue`], a queue where:
//!
//! - **Higher priority first**: the numerically largest priority is
//!   served before any lower one.
//! - **FIFO within a level**: elements sharing a priority come out in the
//!   order they were added.
//! - **In-place reprioritization**: [`PriorityQueue::change_priority`] moves an
//!   existing element to another level.
//!
//! # Quick Start
//!
//! ```
//! use u_pqueue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.add("a1", 3);
//! queue.add("b1", 2);
//! queue.add("c1", 1);
//! queue.add("d1", 1);
//! queue.add("e1", 2);
//!
//! assert_eq!(queue.get_all_priorities(), vec![1, 2, 3]);
//!
//! let order: Vec<_> = queue.iter().copied().collect();
//! assert_eq!(order, vec!["a1", "b1", "e1", "c1", "d1"]);
//!
//! queue.change_priority(&"d1", 5);
//! assert_eq!(queue.pop(), Some("d1"));
//! assert_eq!(queue.len(), 4);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`PriorityQueue`] and
//!   [`QueueConfig`](bucket::QueueConfig)

pub mod bucket;

pub use bucket::{Priority, PriorityQueue, QueueConfig, ScanOrder};

//! Queue configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ScanOrder;

/// Configuration parameters for a [`PriorityQueue`](super::PriorityQueue).
///
/// # Examples
///
/// ```
/// use u_pqueue::bucket::{QueueConfig, ScanOrder};
///
/// let config = QueueConfig::default()
///     .with_scan_order(ScanOrder::Descending)
///     .with_bucket_capacity(16);
/// assert_eq!(config.scan_order, ScanOrder::Descending);
/// assert_eq!(config.bucket_capacity, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueueConfig {
    /// Bucket order used when looking up an element by value.
    pub scan_order: ScanOrder,
    /// Initial capacity reserved for each newly created bucket (0 = lazy).
    pub bucket_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            scan_order: ScanOrder::Ascending,
            bucket_capacity: 0,
        }
    }
}

impl QueueConfig {
    /// Sets the bucket scan order for value lookups.
    pub fn with_scan_order(mut self, order: ScanOrder) -> Self {
        self.scan_order = order;
        self
    }

    /// Sets the initial capacity of newly created buckets.
    pub fn with_bucket_capacity(mut self, capacity: usize) -> Self {
        self.bucket_capacity = capacity;
        self
    }
}

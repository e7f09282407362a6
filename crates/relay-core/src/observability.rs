use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of what a publisher has accepted so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishCounts {
    /// Messages accepted since creation, drained or not.
    pub published: u64,
    /// Messages rejected (capacity).
    pub rejected: u64,
    /// Messages currently waiting, per queue.
    pub pending: BTreeMap<String, usize>,
}

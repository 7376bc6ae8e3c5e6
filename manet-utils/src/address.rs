//! Module to extract the cluster information encoded in the flow monitor's addresses.
//!
//! Every cluster of the simulated topology owns its own `/24` subnet, so the third
//! dot-separated segment of an address identifies the cluster a node belongs to.

/// Index of the dot-separated segment identifying the cluster (zero-indexed).
pub const CLUSTER_SEGMENT: usize = 2;

/// Error returned when an address does not have enough dot-separated segments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Address {address:?} has {found} dot-separated segments, but segment {segment} is required")]
pub struct SegmentError {
    pub address: String,
    pub segment: usize,
    pub found: usize,
}

/// Returns the `index`-th dot-separated segment of `address`, compared as a plain string.
pub fn segment(address: &str, index: usize) -> Result<&str, SegmentError> {
    address
        .split('.')
        .nth(index)
        .ok_or_else(|| SegmentError {
            address: address.to_string(),
            segment: index,
            found: address.split('.').count(),
        })
}

/// Returns the segment of `address` that identifies its cluster.
pub fn cluster_segment(address: &str) -> Result<&str, SegmentError> {
    segment(address, CLUSTER_SEGMENT)
}

/// Checks whether a flow between `src` and `dst` crosses a cluster boundary.
pub fn crosses_clusters(src: &str, dst: &str) -> Result<bool, SegmentError> {
    Ok(cluster_segment(src)? != cluster_segment(dst)?)
}

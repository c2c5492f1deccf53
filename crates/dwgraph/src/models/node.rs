//! Node types for the graph store.
//!
//! This module provides strongly-typed wrappers for graph vertices:
//! - [`NodeId`]: Unique identifier for graph vertices
//! - [`GeoLocation`]: 3-D position carried by every node
//! - [`Node`]: A vertex together with its caller-visible scratch fields

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier (vertex key).
///
/// Using a newtype prevents mixing up node keys with other integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Create a new node ID.
    pub const fn new(id: i32) -> Self {
        NodeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for i32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a node in 3-D space.
///
/// Informational only: no graph algorithm reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GeoLocation {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: GeoLocation = GeoLocation::new(0.0, 0.0, 0.0);

    /// Create a new location.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another location.
    pub fn distance(&self, other: &GeoLocation) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// A graph vertex.
///
/// `weight` and `tag` are free for callers to use. The algorithms in this
/// crate keep their own per-call state and never read or write them on a
/// stored node. Nodes returned from [`shortest_path`](crate::shortest_path)
/// are snapshots whose `weight` holds the cumulative distance from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: NodeId,
    /// Position of the node.
    pub location: GeoLocation,
    /// Scratch distance field.
    pub weight: f64,
    /// Scratch visitation marker.
    pub tag: i32,
}

impl Node {
    /// Create a node at the given location.
    pub fn new(key: NodeId, location: GeoLocation) -> Self {
        Self {
            key,
            location,
            weight: 0.0,
            tag: 0,
        }
    }

    /// The node's key. Fixed for the lifetime of the node.
    pub fn key(&self) -> NodeId {
        self.key
    }

    /// Copy of this node carrying `weight` as its distance value.
    pub(crate) fn with_weight(&self, weight: f64) -> Self {
        Self {
            key: self.key,
            location: self.location,
            weight,
            tag: 0,
        }
    }
}

//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`DirectedWeightedGraph`]: Adjacency-list store with incoming-edge index
//! - [`Node`], [`Edge`]: The entities held by the store
//! - [`NodeId`], [`GeoLocation`]: Node key and position types

pub mod edge;
pub mod graph;
pub mod node;

pub use edge::Edge;
pub use graph::{Adjacency, DirectedWeightedGraph, Reversed};
pub use node::{GeoLocation, Node, NodeId};

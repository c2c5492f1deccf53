//! JSON persistence for [`DirectedWeightedGraph`].
//!
//! Document layout:
//!
//! ```text
//! {
//!   "Edges": [ {"src": 0, "w": 1.5, "dest": 1}, ... ],
//!   "Nodes": [ {"pos": "35.2,32.1,0.0", "id": 0}, ... ]
//! }
//! ```
//!
//! Decoding is all-or-nothing: a graph is only returned once every node and
//! edge has been built. File writes go to a sibling temporary file that is
//! renamed over the target, so a failed save never leaves a truncated
//! document behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{DirectedWeightedGraph, GeoLocation, Node, NodeId};
use crate::{GraphError, Result};

/// Codec configuration.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl CodecConfig {
    /// Create new codec configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit compact single-line JSON.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

/// Serialized form of a whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(rename = "Edges")]
    pub edges: Vec<EdgeRecord>,
    #[serde(rename = "Nodes")]
    pub nodes: Vec<NodeRecord>,
}

/// Serialized node: key and `"x,y,z"` position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub pos: String,
    pub id: NodeId,
}

/// Serialized edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: NodeId,
    pub w: f64,
    pub dest: NodeId,
}

/// Parse a `"x,y,z"` position string.
///
/// The string must split on commas into exactly three floats. Whitespace
/// around each component is ignored.
pub fn parse_position(pos: &str) -> Result<GeoLocation> {
    let parts: Vec<&str> = pos.split(',').collect();
    if parts.len() != 3 {
        return Err(GraphError::MalformedPosition(pos.to_string()));
    }

    let mut coords = [0.0f64; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| GraphError::MalformedPosition(pos.to_string()))?;
    }

    Ok(GeoLocation::new(coords[0], coords[1], coords[2]))
}

/// Build the serialized form of a graph.
pub fn to_document(graph: &DirectedWeightedGraph) -> GraphDocument {
    GraphDocument {
        edges: graph
            .edges()
            .map(|edge| EdgeRecord {
                src: edge.src(),
                w: edge.weight(),
                dest: edge.dest(),
            })
            .collect(),
        nodes: graph
            .nodes()
            .map(|node| NodeRecord {
                pos: node.location.to_string(),
                id: node.key(),
            })
            .collect(),
    }
}

/// Build a graph from its serialized form.
///
/// Fails on a malformed position or on any edge the graph refuses
/// (missing endpoint, self loop, invalid weight).
pub fn from_document(document: &GraphDocument) -> Result<DirectedWeightedGraph> {
    let mut graph = DirectedWeightedGraph::new();

    for record in &document.nodes {
        let location = parse_position(&record.pos)?;
        graph.insert_node(Node::new(record.id, location));
    }
    for record in &document.edges {
        graph.connect(record.src, record.dest, record.w)?;
    }

    Ok(graph)
}

/// Serialize a graph to a JSON string.
pub fn to_json_string(graph: &DirectedWeightedGraph, config: &CodecConfig) -> Result<String> {
    let document = to_document(graph);
    let json = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Parse a graph from a JSON string.
pub fn from_json_str(json: &str) -> Result<DirectedWeightedGraph> {
    let document: GraphDocument = serde_json::from_str(json)?;
    from_document(&document)
}

/// Write a graph to `path` as JSON.
pub fn save_to_file(
    graph: &DirectedWeightedGraph,
    path: impl AsRef<Path>,
    config: &CodecConfig,
) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(graph, config)?;

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, json.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Graph saved"
    );
    Ok(())
}

/// Read a graph from a JSON file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<DirectedWeightedGraph> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = json.len(), "Graph file read");
    from_json_str(&json)
}

/// Saves issued by this process so far, used to keep temp names unique.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Sibling path used while writing `path`.
///
/// The name carries the process id and a per-process counter, so concurrent
/// saves to one target never share a temp file.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    name.push(format!(".{}.{}.tmp", std::process::id(), seq));
    path.with_file_name(name)
}

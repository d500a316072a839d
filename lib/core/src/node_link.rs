//! Node-link exchange format.
//!
//! A graph is flattened into a `nodes` list and a `links` list whose entries
//! reference node ids:
//!
//! ```json
//! {
//!   "directed": false,
//!   "multigraph": false,
//!   "graph": {},
//!   "nodes": [{ "id": [37.7749, -122.4194], "type": "residential" }],
//!   "links": [{ "source": [37.7749, -122.4194], "target": [37.7749, -122.4094] }]
//! }
//! ```
//!
//! `directed`, `multigraph` and `graph` are carried for compatibility with
//! consumers that expect them; city graphs are always undirected simple graphs.

use crate::{CityGraph, Coordinate, Error, LandUse, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: Coordinate,
    #[serde(rename = "type")]
    pub land_use: LandUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: Coordinate,
    pub target: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkDocument {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub graph: serde_json::Map<String, serde_json::Value>,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

impl From<&CityGraph> for NodeLinkDocument {
    fn from(graph: &CityGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id,
                land_use: node.land_use,
            })
            .collect();

        let links = graph
            .edges()
            .map(|edge| {
                let (source, target) = edge.endpoints();
                LinkRecord { source, target }
            })
            .collect();

        Self {
            directed: false,
            multigraph: false,
            graph: serde_json::Map::new(),
            nodes,
            links,
        }
    }
}

impl NodeLinkDocument {
    /// Rebuild the graph described by this document.
    ///
    /// Links are treated as undirected; repeated links collapse into one edge.
    pub fn into_graph(self) -> Result<CityGraph> {
        let mut graph = CityGraph::with_capacity(self.nodes.len(), self.links.len());

        for record in &self.nodes {
            if graph.index_of(&record.id).is_some() {
                return Err(Error::DuplicateNode(record.id));
            }
            graph.add_node(record.id, record.land_use);
        }

        for link in &self.links {
            graph.add_edge(&link.source, &link.target)?;
        }

        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

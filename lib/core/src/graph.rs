// City graph - geocoded nodes joined by undirected adjacency edges
use crate::{Error, LandUse, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

type CoordinateKey = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Geographic position of a node, also its identity.
///
/// On the wire a coordinate is a two-element array `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    fn key(&self) -> CoordinateKey {
        (OrderedFloat(self.lat), OrderedFloat(self.lng))
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lng]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// A city block: a coordinate and its land-use category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: Coordinate,
    pub land_use: LandUse,
}

/// Undirected adjacency between two nodes.
///
/// Endpoints are stored in canonical order, so `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    a: Coordinate,
    b: Coordinate,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        if a.key() <= b.key() {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    #[inline]
    pub fn endpoints(&self) -> (Coordinate, Coordinate) {
        (self.a, self.b)
    }
}

/// Position of a node inside a [`CityGraph`].
///
/// Only meaningful for the graph that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

/// Undirected simple graph keyed by coordinate.
///
/// Nodes and edges keep insertion order; no self-loops, no parallel edges.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    nodes: Vec<Node>,
    index: HashMap<CoordinateKey, NodeIndex>,
    edges: Vec<(NodeIndex, NodeIndex)>,
    edge_set: HashSet<(NodeIndex, NodeIndex)>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            edge_set: HashSet::with_capacity(edges),
        }
    }

    /// Insert a node if its coordinate is absent.
    ///
    /// An existing node keeps its land use; its index is returned either way.
    pub fn add_node(&mut self, id: Coordinate, land_use: LandUse) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id.key()) {
            return idx;
        }
        let idx = NodeIndex(self.nodes.len());
        self.nodes.push(Node { id, land_use });
        self.index.insert(id.key(), idx);
        idx
    }

    /// Connect two nodes by index. Returns `false` if the edge already
    /// exists or both indices name the same node.
    pub fn link(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        if a == b {
            return false;
        }
        let pair = if a < b { (a, b) } else { (b, a) };
        if !self.edge_set.insert(pair) {
            return false;
        }
        self.edges.push(pair);
        true
    }

    /// Connect two existing nodes by coordinate.
    pub fn add_edge(&mut self, a: &Coordinate, b: &Coordinate) -> Result<bool> {
        let ia = self.index_of(a).ok_or(Error::UnknownNode(*a))?;
        let ib = self.index_of(b).ok_or(Error::UnknownNode(*b))?;
        if ia == ib {
            return Err(Error::SelfLoop(*a));
        }
        Ok(self.link(ia, ib))
    }

    #[inline]
    pub fn index_of(&self, id: &Coordinate) -> Option<NodeIndex> {
        self.index.get(&id.key()).copied()
    }

    pub fn node(&self, id: &Coordinate) -> Option<&Node> {
        self.index_of(id).map(|idx| &self.nodes[idx.0])
    }

    pub fn contains_edge(&self, a: &Coordinate, b: &Coordinate) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => {
                let pair = if ia < ib { (ia, ib) } else { (ib, ia) };
                self.edge_set.contains(&pair)
            }
            _ => false,
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .map(|(a, b)| Edge::new(self.nodes[a.0].id, self.nodes[b.0].id))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

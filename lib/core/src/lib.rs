//! # citygrid Core
//!
//! Core library for the citygrid service.
//!
//! This crate provides the data model and the generation routine:
//!
//! - [`GridConfig`] - Coordinate lattice (origin, step, rows, columns)
//! - [`CityGraph`] - Undirected graph of geocoded [`Node`]s and [`Edge`]s
//! - [`LandUse`] - Category assigned to every node
//! - [`CityGraphGenerator`] - Lays out the grid and draws land uses
//! - [`NodeLinkDocument`] - JSON node-link exchange format
//!
//! ## Example
//!
//! ```rust
//! use citygrid_core::{CityGraphGenerator, NodeLinkDocument};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let generator = CityGraphGenerator::default();
//! let graph = generator.generate(&mut StdRng::seed_from_u64(7));
//! assert_eq!(graph.node_count(), 100);
//! assert_eq!(graph.edge_count(), 180);
//!
//! let json = NodeLinkDocument::from(&graph).to_json().unwrap();
//! let parsed = NodeLinkDocument::from_json(&json).unwrap().into_graph().unwrap();
//! assert_eq!(parsed.edge_count(), 180);
//! ```

pub mod error;
pub mod land_use;
pub mod graph;
pub mod grid;
pub mod generator;
pub mod node_link;

pub use error::{Error, Result};
pub use land_use::LandUse;
pub use graph::{CityGraph, Coordinate, Edge, Node, NodeIndex};
pub use grid::{GridCell, GridConfig};
pub use generator::CityGraphGenerator;
pub use node_link::{LinkRecord, NodeLinkDocument, NodeRecord};

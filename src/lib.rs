//! # citygrid
//!
//! A small HTTP service that procedurally generates a synthetic city grid and
//! returns it as a node-link JSON graph.
//!
//! Every request builds a fresh 10×10 lattice of geocoded blocks starting at
//! `(37.7749, -122.4194)` with a `0.01` degree step. Each block gets a random
//! land use (residential, commercial, industrial or public) and is connected
//! to its north, south, east and west neighbours: 100 nodes, 180 edges.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! citygrid --port 5000
//! curl http://localhost:5000/generate_city
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use citygrid::prelude::*;
//!
//! let graph = CityGraphGenerator::default().generate(&mut rand::rng());
//! let document = NodeLinkDocument::from(&graph);
//! assert_eq!(document.nodes.len(), 100);
//! assert_eq!(document.links.len(), 180);
//! ```
//!
//! ## Crate Structure
//!
//! - [`citygrid-core`](https://docs.rs/citygrid-core) - Grid layout, graph model, generator, node-link format
//! - [`citygrid-api`](https://docs.rs/citygrid-api) - REST API (`GET /generate_city`)

// Re-export core types
pub use citygrid_core::{
    CityGraph, CityGraphGenerator, Coordinate, Edge, Node, NodeIndex,
    GridCell, GridConfig, LandUse,
    NodeLinkDocument, NodeRecord, LinkRecord,
    Error, Result,
};

// Re-export API
pub use citygrid_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CityGraph, CityGraphGenerator, Coordinate, Edge, Node,
        GridCell, GridConfig, LandUse,
        NodeLinkDocument,
        Error, Result,
        RestApi,
    };
}

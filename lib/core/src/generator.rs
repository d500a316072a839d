use crate::grid::{GridCell, GridConfig};
use crate::{CityGraph, LandUse, NodeIndex, Result};
use rand::Rng;
use tracing::debug;

/// Builds city-grid graphs: one node per grid cell with a random land use,
/// joined to its north and west neighbours.
#[derive(Debug, Clone, Default)]
pub struct CityGraphGenerator {
    config: GridConfig,
}

impl CityGraphGenerator {
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Generate a fresh graph, drawing each land use independently from `rng`.
    ///
    /// Neighbours are resolved through their grid indices, so edge endpoints
    /// are always the exact coordinates stored on the nodes.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> CityGraph {
        let config = &self.config;
        let mut graph = CityGraph::with_capacity(config.expected_nodes(), config.expected_edges());
        let mut cells: Vec<NodeIndex> = Vec::with_capacity(config.expected_nodes());

        for cell in config.cells() {
            let land_use: LandUse = rng.random();
            let idx = graph.add_node(config.coordinate(cell), land_use);
            cells.push(idx);

            if cell.row > 0 {
                let north = cells[flat_index(config, GridCell::new(cell.row - 1, cell.col))];
                graph.link(north, idx);
            }
            if cell.col > 0 {
                let west = cells[flat_index(config, GridCell::new(cell.row, cell.col - 1))];
                graph.link(west, idx);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated city graph"
        );
        graph
    }
}

#[inline]
fn flat_index(config: &GridConfig, cell: GridCell) -> usize {
    cell.row * config.cols + cell.col
}

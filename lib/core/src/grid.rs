use crate::{Coordinate, Error, Result};

pub const DEFAULT_ORIGIN_LAT: f64 = 37.7749;
pub const DEFAULT_ORIGIN_LNG: f64 = -122.4194;
pub const DEFAULT_STEP: f64 = 0.01;
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Layout of the coordinate lattice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub origin_lat: f64,
    pub origin_lng: f64,
    /// Spacing between neighbouring cells, in degrees, on both axes.
    pub step: f64,
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin_lat: DEFAULT_ORIGIN_LAT,
            origin_lng: DEFAULT_ORIGIN_LNG,
            step: DEFAULT_STEP,
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
        }
    }
}

/// One (row, column) position in the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    #[inline]
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when the cells differ by one step along exactly one axis.
    pub fn is_adjacent(&self, other: &GridCell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "step must be a positive finite number, got {}",
                self.step
            )));
        }
        if !self.origin_lat.is_finite() || !self.origin_lng.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "origin must be finite, got ({}, {})",
                self.origin_lat, self.origin_lng
            )));
        }
        Ok(())
    }

    /// Coordinate of a cell, always computed from its indices.
    #[inline]
    pub fn coordinate(&self, cell: GridCell) -> Coordinate {
        Coordinate::new(
            self.origin_lat + cell.row as f64 * self.step,
            self.origin_lng + cell.col as f64 * self.step,
        )
    }

    /// Inverse of [`GridConfig::coordinate`]; only exact matches resolve.
    pub fn cell_of(&self, coordinate: &Coordinate) -> Option<GridCell> {
        let row = ((coordinate.lat - self.origin_lat) / self.step).round();
        let col = ((coordinate.lng - self.origin_lng) / self.step).round();
        if row < 0.0 || col < 0.0 || row >= self.rows as f64 || col >= self.cols as f64 {
            return None;
        }
        let cell = GridCell::new(row as usize, col as usize);
        (self.coordinate(cell) == *coordinate).then_some(cell)
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| GridCell::new(row, col)))
    }

    #[inline]
    pub fn expected_nodes(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn expected_edges(&self) -> usize {
        self.rows * self.cols.saturating_sub(1) + self.cols * self.rows.saturating_sub(1)
    }
}

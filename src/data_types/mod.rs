//! Data model for the correlation grid.

pub mod matrix;
pub mod state;

use serde::{Deserialize, Serialize};

pub use matrix::CorrelationMatrix;
pub use state::InteractionState;

/// Kind of data in a matrix row. The pairing of two row types decides which
/// correlation method a cell's tooltip reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowType {
    Numeric,
    Nominal,
}

/// 2-dimensional index of a grid cell; `i` runs along x, `j` along y.
/// Title cells use the `i == j` convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub i: usize,
    pub j: usize,
}

impl CellIndex {
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Pre-calculated paint model for one cell. Constructed immediately before
/// painting and discarded afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Horizontal location on the canvas.
    pub x: f64,
    /// Vertical location on the canvas.
    pub y: f64,
    /// Width and height.
    pub size: f64,
    /// Signed correlation value, NaN when absent.
    pub value: f64,
    /// Square if compact, oval otherwise.
    pub compact: bool,
}

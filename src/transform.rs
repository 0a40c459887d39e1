//! Index↔pixel mapping and pointer hit-testing for one laid-out frame.

use glam::DVec2;

use crate::data_types::{Cell, CellIndex, CorrelationMatrix};
use crate::sizing::Layout;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }
}

/// What a pointer position resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    DataCell(CellIndex),
    /// Title cell in the label column; carries `i == j`.
    TitleCell(CellIndex),
    Outside,
}

/// Pixel geometry of a laid-out grid. The cell block is right-aligned; the
/// label column takes the left remainder.
#[derive(Clone, Copy, Debug)]
pub struct GridTransform {
    layout: Layout,
    border_width: f64,
}

impl GridTransform {
    pub fn new(layout: Layout, border_width: f32) -> Self {
        Self {
            layout,
            border_width: f64::from(border_width),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Pixel rectangle of data cell `index`.
    pub fn cell_rect(&self, index: CellIndex) -> Rect {
        let size = self.layout.cell_size;
        let x = self.layout.width - (self.layout.length - index.i) as f64 * size;
        let y = index.j as f64 * size;
        Rect::new(x, y, size, size)
    }

    /// Paint model for data cell `index`.
    pub fn cell(&self, matrix: &CorrelationMatrix, index: CellIndex) -> Cell {
        let rect = self.cell_rect(index);
        Cell {
            x: rect.origin.x,
            y: rect.origin.y,
            size: self.layout.cell_size,
            value: matrix.signed_value(index.i, index.j),
            compact: self.layout.compact,
        }
    }

    /// Resolves a pointer position to a data cell. The cell region starts at
    /// the cell block's left edge minus the border width and excludes pixels
    /// within the border of the top/bottom edges.
    pub fn detect_cell(&self, position: DVec2) -> Option<CellIndex> {
        if self.layout.is_degenerate() {
            return None;
        }
        let region_start = self.layout.cells_x() - self.border_width;
        if position.x <= region_start {
            return None;
        }
        if position.y <= self.border_width || position.y >= self.layout.height - self.border_width {
            return None;
        }
        let i = ((position.x - region_start) / self.layout.cell_size).floor();
        let j = (position.y / self.layout.cell_size).floor();
        if i < 0.0 || j < 0.0 {
            return None;
        }
        let (i, j) = (i as usize, j as usize);
        (i < self.layout.length && j < self.layout.length).then(|| CellIndex::new(i, j))
    }

    /// Resolves a pointer position to a title cell in the label column.
    pub fn detect_title_cell(&self, position: DVec2) -> Option<CellIndex> {
        if self.layout.is_degenerate() {
            return None;
        }
        let region_start = self.layout.cells_x() - self.border_width;
        if position.x <= self.border_width || position.x > region_start {
            return None;
        }
        if position.y <= self.border_width || position.y >= self.layout.height - self.border_width {
            return None;
        }
        let row = (position.y / self.layout.cell_size).floor();
        if row < 0.0 {
            return None;
        }
        let row = row as usize;
        (row < self.layout.length).then(|| CellIndex::new(row, row))
    }

    /// Three-way classification used by the interaction state machine.
    pub fn hit(&self, position: DVec2) -> Hit {
        if let Some(index) = self.detect_cell(position) {
            Hit::DataCell(index)
        } else if let Some(index) = self.detect_title_cell(position) {
            Hit::TitleCell(index)
        } else {
            Hit::Outside
        }
    }
}

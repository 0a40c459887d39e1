//! Zoom sub-grid model: a bounded window of the matrix re-rendered at a
//! fixed fraction of the grid height, with its own labels.

use crate::data_types::{CellIndex, CorrelationMatrix};
use crate::host::{FontSpec, TextMeasurer};
use crate::sizing::Layout;
use crate::theme::GridTheme;
use crate::utils;

/// Geometry and labels of one zoom session. Created on press inside a data
/// cell, recreated whenever the initiator changes during a drag, destroyed
/// on release.
#[derive(Clone, Debug, PartialEq)]
pub struct Zoom {
    /// Cell the zoom was opened from.
    pub initiator: CellIndex,
    /// Cells per side: `min(theme.zoom_length, N)`.
    pub length: usize,
    /// First matrix index shown along x.
    pub start_i: usize,
    /// First matrix index shown along y.
    pub start_j: usize,
    /// Side of the outlined source region in the main grid.
    pub selection_size: f64,
    /// Side of one zoom cell.
    pub cell_size: f64,
    pub font_size: f32,
    pub labels_margin: f64,
    /// Labels for the rows shown along y, abbreviated to the pixel budget.
    pub horizontal_labels: Vec<String>,
    pub horizontal_labels_width: f64,
    /// Labels for the columns shown along x, drawn rotated.
    pub vertical_labels: Vec<String>,
    pub vertical_labels_width: f64,
    /// Side of the square cell block, `length * cell_size`.
    pub cells_size: f64,
    pub width: f64,
    pub height: f64,
    /// Box origin; the box is anchored at the canvas' top-right corner.
    pub x: f64,
    pub y: f64,
}

impl Zoom {
    /// Builds the zoom for `initiator` against the current layout.
    ///
    /// The window is centered on the initiator, then clamped per axis into
    /// `[0, N - length]` so an edge click still yields a full-length window.
    /// The cell size comes top-down from the configured fraction of the grid
    /// height, not from the main cell size, so the overlay occupies a
    /// predictable share of the canvas for any N.
    pub fn create(
        initiator: CellIndex,
        matrix: &CorrelationMatrix,
        layout: &Layout,
        theme: &GridTheme,
        measurer: &dyn TextMeasurer,
    ) -> Zoom {
        let n = matrix.len();
        let length = theme.zoom_length.min(n).max(1);
        let start_i = initiator.i.saturating_sub(length / 2).min(n - length);
        let start_j = initiator.j.saturating_sub(length / 2).min(n - length);

        let cell_size = layout.height * theme.zoom_area_proportion / length as f64;
        let cells_size = cell_size * length as f64;
        let font_size = (cell_size * theme.label_height_proportion) as f32;
        let labels_margin = cell_size * (1.0 - theme.label_height_proportion) / 2.0;
        let margin_total = cell_size * (1.0 - theme.label_height_proportion);
        let font = FontSpec::new(theme.label_font_family.clone(), font_size);

        // Label budgets are pixel budgets against the canvas, resolved with
        // real text hit-testing rather than a character cap.
        let horizontal_budget = (layout.width - cells_size - margin_total).max(0.0);
        let (horizontal_labels, widest_horizontal) = abbreviated_slice(
            matrix,
            start_j,
            length,
            &font,
            horizontal_budget,
            measurer,
        );
        let vertical_budget = (layout.height - cells_size - margin_total).max(0.0);
        let (vertical_labels, widest_vertical) =
            abbreviated_slice(matrix, start_i, length, &font, vertical_budget, measurer);

        let horizontal_labels_width = widest_horizontal + margin_total;
        let vertical_labels_width = widest_vertical + margin_total;
        let width = horizontal_labels_width + cells_size;
        let height = vertical_labels_width + cells_size;

        Zoom {
            initiator,
            length,
            start_i,
            start_j,
            selection_size: length as f64 * layout.cell_size,
            cell_size,
            font_size,
            labels_margin,
            horizontal_labels,
            horizontal_labels_width,
            vertical_labels,
            vertical_labels_width,
            cells_size,
            width,
            height,
            x: layout.width - width,
            y: 0.0,
        }
    }

    /// Matrix indices of the window-local cell `(l, m)`.
    pub fn global_index(&self, l: usize, m: usize) -> CellIndex {
        CellIndex::new(self.start_i + l, self.start_j + m)
    }

    pub fn font(&self, theme: &GridTheme) -> FontSpec {
        FontSpec::new(theme.label_font_family.clone(), self.font_size)
    }
}

fn abbreviated_slice(
    matrix: &CorrelationMatrix,
    start: usize,
    length: usize,
    font: &FontSpec,
    budget: f64,
    measurer: &dyn TextMeasurer,
) -> (Vec<String>, f64) {
    let labels: Vec<String> = matrix.titles()[start..start + length]
        .iter()
        .map(|title| utils::abbreviate_to_width(title, font, budget, measurer))
        .collect();
    let widest = labels
        .iter()
        .map(|label| measurer.width(font, label))
        .fold(0.0, f64::max);
    (labels, widest)
}

//! Adaptive sizing: derives one consistent cell size for the grid-plus-label
//! block from the space the host offers.

use glam::DVec2;
use tracing::debug;

use crate::data_types::CorrelationMatrix;
use crate::host::{FontSpec, TextMeasurer};
use crate::theme::GridTheme;
use crate::utils;

/// Resolved geometry for one frame. Produced by [`compute_layout`] and
/// threaded explicitly into rendering and hit-testing; nothing here is
/// recomputed behind the caller's back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Rows/columns of the matrix this layout was computed for.
    pub length: usize,
    /// Side of one data cell in pixels.
    pub cell_size: f64,
    /// Label font size derived from the cell size.
    pub font_size: f32,
    /// Overall canvas width: cell block plus the label column.
    pub width: f64,
    /// Overall canvas height: `length * cell_size`.
    pub height: f64,
    /// True when cells are too small for ellipse glyphs.
    pub compact: bool,
}

impl Layout {
    /// Degenerate layout for non-positive available space. Rendering against
    /// it is a no-op rather than an error.
    pub const EMPTY: Layout = Layout {
        length: 0,
        cell_size: 0.0,
        font_size: 0.0,
        width: 0.0,
        height: 0.0,
        compact: false,
    };

    pub fn is_degenerate(&self) -> bool {
        self.length == 0 || self.cell_size <= 0.0
    }

    /// Width of the N×N cell block.
    pub fn cells_width(&self) -> f64 {
        self.cell_size * self.length as f64
    }

    /// Left edge of the cell block; the label column is everything to the
    /// left of it.
    pub fn cells_x(&self) -> f64 {
        self.width - self.cells_width()
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Computes the preferred layout for `available` pixels of space.
///
/// The grid is a square block of N×N cells plus one label column, so two fit
/// regimes exist: width-bound (height follows from the cell size) and
/// height-bound (width follows). The label column's share is expressed as a
/// synthetic aspect ratio of one label cell, measured with the injected text
/// service. A final correction pass re-measures the longest label at the
/// font size the chosen cell size implies and only ever shrinks the result,
/// so repeated resize passes cannot oscillate.
pub fn compute_layout(
    available: DVec2,
    matrix: &CorrelationMatrix,
    theme: &GridTheme,
    measurer: &dyn TextMeasurer,
) -> Layout {
    let length = matrix.len();
    let borders = f64::from(theme.border_width) * 2.0;
    let free_w = available.x - borders;
    let free_h = available.y - borders;
    if length == 0 || free_w <= 0.0 || free_h <= 0.0 {
        return Layout::EMPTY;
    }

    let n = length as f64;

    // Synthetic label-cell aspect ratio at a provisional font.
    let provisional_font = (free_h.min(free_w) / n) as f32;
    let proportion = label_cell_proportion(matrix, theme, measurer, provisional_font);

    let horizontal_fit = if free_h > free_w {
        // Taller than wide: the grid is always wider than tall, so width
        // must be the binding dimension.
        true
    } else {
        let slack = free_w - free_h;
        let required_labels_width = (free_h / n) * proportion;
        slack < required_labels_width
    };

    let mut cell_size = if horizontal_fit {
        free_w / (n + proportion)
    } else {
        free_h / n
    };

    // Correction pass: glyph width does not scale perfectly linearly with
    // font height, so re-measure at the font the cell size implies. Shrink
    // only; growing here would let consecutive passes oscillate.
    let derived_font = (cell_size * theme.label_height_proportion) as f32;
    let corrected = measured_proportion(matrix, theme, measurer, derived_font, cell_size);
    let mut proportion_final = proportion;
    if corrected > proportion {
        proportion_final = corrected;
        let refit = if horizontal_fit {
            free_w / (n + corrected)
        } else {
            // Height-bound: the wider label column grows the width instead,
            // unless that would overflow the available width.
            if cell_size * (n + corrected) > free_w {
                free_w / (n + corrected)
            } else {
                cell_size
            }
        };
        cell_size = cell_size.min(refit);
    }

    let layout = Layout {
        length,
        cell_size,
        font_size: (cell_size * theme.label_height_proportion) as f32,
        width: cell_size * (n + proportion_final),
        height: cell_size * n,
        compact: cell_size < theme.compact_cell_size,
    };
    debug!(
        cell_size = layout.cell_size,
        width = layout.width,
        height = layout.height,
        compact = layout.compact,
        horizontal_fit,
        "grid layout computed"
    );
    layout
}

/// Aspect ratio of one label cell at `font_size`: measured longest label
/// plus margins over the implied cell height plus margins.
fn label_cell_proportion(
    matrix: &CorrelationMatrix,
    theme: &GridTheme,
    measurer: &dyn TextMeasurer,
    font_size: f32,
) -> f64 {
    let font_height = f64::from(font_size);
    let margin = font_height * (1.0 - theme.label_height_proportion) / 2.0;
    let widest = longest_label_width(matrix, theme, measurer, font_size);
    (widest + margin * 2.0) / (font_height + margin * 2.0)
}

/// Label-column share of one cell at the final font: measured width plus
/// margins over the actual cell size.
fn measured_proportion(
    matrix: &CorrelationMatrix,
    theme: &GridTheme,
    measurer: &dyn TextMeasurer,
    font_size: f32,
    cell_size: f64,
) -> f64 {
    if cell_size <= 0.0 {
        return 0.0;
    }
    let margin = cell_size * (1.0 - theme.label_height_proportion) / 2.0;
    let widest = longest_label_width(matrix, theme, measurer, font_size);
    (widest + margin * 2.0) / cell_size
}

fn longest_label_width(
    matrix: &CorrelationMatrix,
    theme: &GridTheme,
    measurer: &dyn TextMeasurer,
    font_size: f32,
) -> f64 {
    let font = FontSpec::new(theme.label_font_family.clone(), font_size);
    matrix
        .titles()
        .iter()
        .map(|title| {
            let label = utils::abbreviate(title, theme.label_abbreviation_length);
            measurer.width(&font, &label)
        })
        .fold(0.0, f64::max)
}

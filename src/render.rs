//! Stateless painting: turns the matrix, theme, layout and interaction
//! state into an ordered list of drawing primitives.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::DVec2;

use crate::color::Rgba;
use crate::data_types::{Cell, CellIndex, CorrelationMatrix, InteractionState};
use crate::host::FontSpec;
use crate::sizing::Layout;
use crate::theme::GridTheme;
use crate::transform::{GridTransform, Rect};
use crate::utils;
use crate::zoom::Zoom;

/// Drawing primitives a host backend replays in order. Rotations are in
/// radians about the command's own center/origin; y grows downward.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Resets a region to a flat color, erasing anything painted earlier.
    Clear { rect: Rect, color: Rgba },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba,
        width: f32,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgba,
        width: f32,
    },
    /// Filled and stroked ellipse, rotated about its center.
    Ellipse {
        center: DVec2,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Text with baseline starting at `origin`, rotated about it.
    Text {
        origin: DVec2,
        text: String,
        font: FontSpec,
        color: Rgba,
        rotation: f64,
    },
    /// Vertical gradient through the given stops (fraction, color).
    GradientV {
        rect: Rect,
        stops: Vec<(f32, Rgba)>,
    },
}

/// One-frame renderer. Borrows everything, owns nothing; painting reads the
/// data model and emits commands, so a frame either completes or the caller
/// drops it wholesale.
pub struct GridRenderer<'a> {
    matrix: &'a CorrelationMatrix,
    theme: &'a GridTheme,
    layout: Layout,
    transform: GridTransform,
}

impl<'a> GridRenderer<'a> {
    pub fn new(matrix: &'a CorrelationMatrix, theme: &'a GridTheme, layout: Layout) -> Self {
        Self {
            matrix,
            theme,
            layout,
            transform: GridTransform::new(layout, theme.border_width),
        }
    }

    /// Paints the full frame for the given interaction state.
    pub fn render(&self, state: &InteractionState) -> Vec<DrawCommand> {
        if self.layout.is_degenerate() {
            return Vec::new();
        }
        let mut out = Vec::new();

        // Compact cells are opaque squares, so highlight bands go on top of
        // them; translucent ellipse cells sit on top of the bands instead.
        if self.layout.compact {
            self.paint_cells(&mut out);
            self.paint_highlight(state.highlight(), &mut out);
        } else {
            self.paint_highlight(state.highlight(), &mut out);
            self.paint_cells(&mut out);
        }

        self.paint_grid_lines(&mut out);
        self.paint_titles(&mut out);
        if let Some(zoom) = state.zoom() {
            self.paint_zoom(zoom, &mut out);
        }
        self.paint_border(&mut out);
        out
    }

    /// Strict lower triangle (column < row) in ellipse mode; every
    /// off-diagonal cell in compact mode, where there is no room for
    /// per-cell orientation cues.
    fn paint_cells(&self, out: &mut Vec<DrawCommand>) {
        let length = self.layout.length;
        for i in 0..length {
            for j in 0..length {
                if j > i || (self.layout.compact && j != i) {
                    let cell = self.transform.cell(self.matrix, CellIndex::new(i, j));
                    self.paint_cell(cell, out);
                }
            }
        }
    }

    fn paint_cell(&self, cell: Cell, out: &mut Vec<DrawCommand>) {
        if cell.value.is_nan() {
            return;
        }

        let magnitude = cell.value.abs();
        let (base, rotation) = if cell.value > 0.0 {
            (self.theme.positive_color, FRAC_PI_4)
        } else {
            (self.theme.negative_color, -FRAC_PI_4)
        };
        // Magnitude drives saturation: zero correlation disappears into the
        // host background.
        let fill = base.interpolate(self.theme.background_color, magnitude);

        if cell.compact {
            out.push(DrawCommand::FillRect {
                rect: Rect::new(cell.x, cell.y, cell.size, cell.size),
                color: fill,
            });
            return;
        }

        let margin = cell.size * (1.0 - self.theme.circle_proportion) / 2.0;
        let diameter_y = cell.size - margin * 2.0;
        let diameter_x = diameter_y * (1.0 - magnitude * self.theme.squeeze_coefficient);
        out.push(DrawCommand::Ellipse {
            center: DVec2::new(cell.x + cell.size / 2.0, cell.y + cell.size / 2.0),
            radius_x: diameter_x / 2.0,
            radius_y: diameter_y / 2.0,
            rotation,
            fill,
            stroke: self.theme.ellipse_stroke_color,
            stroke_width: self.theme.ellipse_stroke_width,
        });
    }

    fn paint_highlight(&self, highlight: Option<CellIndex>, out: &mut Vec<DrawCommand>) {
        let Some(index) = highlight else {
            return;
        };
        let cell = self.layout.cell_size;
        let color = self.theme.highlight_color();
        out.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, index.j as f64 * cell, self.layout.width, cell),
            color,
        });
        out.push(DrawCommand::FillRect {
            rect: Rect::new(
                self.layout.width - (self.layout.length - index.i) as f64 * cell,
                0.0,
                cell,
                self.layout.height,
            ),
            color,
        });
    }

    fn paint_grid_lines(&self, out: &mut Vec<DrawCommand>) {
        let color = self.theme.grid_lines_color;
        let width = self.theme.grid_lines_width;
        let cell = self.layout.cell_size;
        for i in 1..=self.layout.length {
            let x = self.layout.width - cell * i as f64;
            out.push(DrawCommand::Line {
                from: DVec2::new(x, 0.0),
                to: DVec2::new(x, self.layout.height),
                color,
                width,
            });
        }
        for i in 0..self.layout.length {
            let y = i as f64 * cell;
            out.push(DrawCommand::Line {
                from: DVec2::new(0.0, y),
                to: DVec2::new(self.layout.width, y),
                color,
                width,
            });
        }
    }

    fn paint_titles(&self, out: &mut Vec<DrawCommand>) {
        let cell = self.layout.cell_size;
        let margin = (1.0 - self.theme.label_height_proportion) * cell / 2.0;
        let font = FontSpec::new(
            self.theme.label_font_family.clone(),
            self.layout.font_size,
        );
        for (row, title) in self.matrix.titles().iter().enumerate() {
            out.push(DrawCommand::Text {
                origin: DVec2::new(margin, (row + 1) as f64 * cell - margin),
                text: utils::abbreviate(title, self.theme.label_abbreviation_length),
                font: font.clone(),
                color: self.theme.labels_color,
                rotation: 0.0,
            });
        }
    }

    fn paint_border(&self, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::StrokeRect {
            rect: Rect::new(0.0, 0.0, self.layout.width, self.layout.height),
            color: self.theme.border_color,
            width: self.theme.border_width,
        });
    }

    fn paint_zoom(&self, zoom: &Zoom, out: &mut Vec<DrawCommand>) {
        let cell = self.layout.cell_size;

        // Outline the zoomed region in the main grid.
        out.push(DrawCommand::StrokeRect {
            rect: Rect::new(
                self.layout.width - (self.layout.length - zoom.start_i) as f64 * cell,
                zoom.start_j as f64 * cell,
                zoom.selection_size,
                zoom.selection_size,
            ),
            color: self.theme.zoom_selection_border_color,
            width: self.theme.zoom_selection_border_width,
        });

        // The box erases whatever it covers before painting its own frame.
        let box_rect = Rect::new(zoom.x, zoom.y, zoom.width, zoom.height);
        out.push(DrawCommand::Clear {
            rect: box_rect,
            color: self.theme.background_color,
        });
        out.push(DrawCommand::StrokeRect {
            rect: box_rect,
            color: self.theme.zoom_border_color,
            width: self.theme.zoom_border_width,
        });

        let cells_origin = DVec2::new(
            zoom.x + zoom.width - zoom.cells_size,
            zoom.y + zoom.height - zoom.cells_size,
        );

        // Strict lower triangle only; the diagonal stays blank in the zoom
        // even in compact mode.
        for l in 0..zoom.length {
            for m in 0..zoom.length {
                let index = zoom.global_index(l, m);
                if index.i >= index.j {
                    continue;
                }
                let cell_model = Cell {
                    x: cells_origin.x + l as f64 * zoom.cell_size,
                    y: cells_origin.y + m as f64 * zoom.cell_size,
                    size: zoom.cell_size,
                    value: self.matrix.signed_value(index.i, index.j),
                    compact: self.layout.compact,
                };
                self.paint_cell(cell_model, out);
            }
        }

        // Zoom grid lines span the label blocks too.
        let color = self.theme.grid_lines_color;
        let width = self.theme.grid_lines_width;
        for k in 0..zoom.length {
            let y = cells_origin.y + k as f64 * zoom.cell_size;
            out.push(DrawCommand::Line {
                from: DVec2::new(zoom.x, y),
                to: DVec2::new(zoom.x + zoom.width, y),
                color,
                width,
            });
            let x = cells_origin.x + k as f64 * zoom.cell_size;
            out.push(DrawCommand::Line {
                from: DVec2::new(x, zoom.y),
                to: DVec2::new(x, zoom.y + zoom.height),
                color,
                width,
            });
        }

        let font = zoom.font(self.theme);
        for (l, label) in zoom.horizontal_labels.iter().enumerate() {
            out.push(DrawCommand::Text {
                origin: DVec2::new(
                    zoom.x + zoom.labels_margin,
                    cells_origin.y + (l + 1) as f64 * zoom.cell_size - zoom.labels_margin,
                ),
                text: label.clone(),
                font: font.clone(),
                color: self.theme.labels_color,
                rotation: 0.0,
            });
        }
        for (l, label) in zoom.vertical_labels.iter().enumerate() {
            // Reads bottom-up along its column, ending at the cell block.
            let anchor_x = zoom.x + zoom.horizontal_labels_width + (l + 1) as f64 * zoom.cell_size;
            let anchor_y = zoom.y + zoom.vertical_labels_width;
            out.push(DrawCommand::Text {
                origin: DVec2::new(anchor_x - zoom.labels_margin, anchor_y - zoom.labels_margin),
                text: label.clone(),
                font: font.clone(),
                color: self.theme.labels_color,
                rotation: -FRAC_PI_2,
            });
        }
    }
}

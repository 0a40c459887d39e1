//! The grid component: wires sizing, hit-testing, interaction and painting
//! together over one matrix and theme.

use glam::DVec2;
use tracing::debug;

use crate::data_types::{Cell, CellIndex, CorrelationMatrix, InteractionState};
use crate::host::{RepaintRequester, TextMeasurer};
use crate::input::InputHandler;
use crate::legend::TemperatureScale;
use crate::render::{DrawCommand, GridRenderer};
use crate::sizing::{self, Layout};
use crate::theme::GridTheme;
use crate::tooltip;
use crate::transform::GridTransform;
use crate::zoom::Zoom;

/// Interactive correlation grid. Owns the matrix, the theme, the transient
/// interaction state and the current layout; everything else is derived per
/// call. All coordinates are local to the grid canvas, whose top-left is
/// (0, 0); outer margins and legend placement are the host's concern,
/// accounted for in [`preferred_size`].
///
/// [`preferred_size`]: CorrelationGrid::preferred_size
pub struct CorrelationGrid {
    matrix: CorrelationMatrix,
    theme: GridTheme,
    input: InputHandler,
    layout: Layout,
}

impl CorrelationGrid {
    pub fn new(matrix: CorrelationMatrix) -> Self {
        Self::with_theme(matrix, GridTheme::default())
    }

    pub fn with_theme(matrix: CorrelationMatrix, theme: GridTheme) -> Self {
        Self {
            matrix,
            theme,
            input: InputHandler::new(),
            layout: Layout::EMPTY,
        }
    }

    pub fn matrix(&self) -> &CorrelationMatrix {
        &self.matrix
    }

    pub fn theme(&self) -> &GridTheme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut GridTheme {
        &mut self.theme
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.input.state()
    }

    pub fn is_compact(&self) -> bool {
        self.layout.compact
    }

    pub fn transform(&self) -> GridTransform {
        GridTransform::new(self.layout, self.theme.border_width)
    }

    /// Paint model for one cell at the current layout.
    pub fn cell(&self, index: CellIndex) -> Cell {
        self.transform().cell(&self.matrix, index)
    }

    /// Size the component asks for inside `available` host pixels: the grid
    /// canvas plus outer margins, plus the legend column when enabled.
    pub fn preferred_size(&self, available: DVec2, measurer: &dyn TextMeasurer) -> DVec2 {
        let (free, extra) = self.reserve(available, measurer);
        let layout = sizing::compute_layout(free, &self.matrix, &self.theme, measurer);
        if layout.is_degenerate() {
            return DVec2::ZERO;
        }
        layout.size() + extra
    }

    /// Recomputes the layout for a new host size. An active zoom is rebuilt
    /// against the new geometry so a resize mid-drag cannot leave a stale
    /// overlay on screen.
    pub fn resize(&mut self, available: DVec2, measurer: &dyn TextMeasurer) {
        let (free, _) = self.reserve(available, measurer);
        self.layout = sizing::compute_layout(free, &self.matrix, &self.theme, measurer);
        debug!(width = available.x, height = available.y, "grid resized");
        if let Some(active) = self.input.state().zoom() {
            let rebuilt = Zoom::create(
                active.initiator,
                &self.matrix,
                &self.layout,
                &self.theme,
                measurer,
            );
            self.input.replace_zoom(rebuilt);
        }
    }

    /// Paints the current frame: the grid canvas at the origin and, when
    /// enabled, the legend column to its right. Labels were already measured
    /// during layout and zoom creation, so painting needs no text service.
    pub fn render(&self) -> Vec<DrawCommand> {
        let renderer = GridRenderer::new(&self.matrix, &self.theme, self.layout);
        let mut commands = renderer.render(self.input.state());
        if self.theme.show_legend && !self.layout.is_degenerate() {
            let origin = DVec2::new(self.layout.width + self.theme.grid_margin, 0.0);
            commands.extend(TemperatureScale::render(&self.theme, origin, self.layout.height));
        }
        commands
    }

    pub fn on_mouse_down(
        &mut self,
        position: DVec2,
        measurer: &dyn TextMeasurer,
        repaint: &mut dyn RepaintRequester,
    ) {
        let hit = self.transform().hit(position);
        let (matrix, theme, layout) = (&self.matrix, &self.theme, &self.layout);
        self.input.on_press(
            hit,
            |index| Zoom::create(index, matrix, layout, theme, measurer),
            repaint,
        );
    }

    pub fn on_mouse_drag(
        &mut self,
        position: DVec2,
        measurer: &dyn TextMeasurer,
        repaint: &mut dyn RepaintRequester,
    ) {
        let hit = self.transform().hit(position);
        let (matrix, theme, layout) = (&self.matrix, &self.theme, &self.layout);
        self.input.on_drag(
            hit,
            |index| Zoom::create(index, matrix, layout, theme, measurer),
            repaint,
        );
    }

    pub fn on_mouse_up(&mut self, repaint: &mut dyn RepaintRequester) {
        self.input.on_release(repaint);
    }

    /// Tooltip text for a hover position; `None` outside the grid.
    pub fn tooltip_text(&self, position: DVec2) -> Option<String> {
        tooltip::tooltip_text(self.transform().hit(position), &self.matrix, &self.theme)
    }

    /// Splits the host's available space into the share the grid canvas may
    /// use and the fixed extras (margins, legend) taken off it.
    fn reserve(&self, available: DVec2, measurer: &dyn TextMeasurer) -> (DVec2, DVec2) {
        let mut extra = DVec2::splat(self.theme.grid_margin * 2.0);
        if self.theme.show_legend {
            extra.x += TemperatureScale::preferred_width(&self.theme, measurer) + self.theme.grid_margin;
        }
        (available - extra, extra)
    }
}

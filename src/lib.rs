//! corrgrid: interactive correlation matrix grid.
//!
//! Renders an N×N correlation matrix as color-and-shape glyphs with row
//! labels, press-and-hold row highlighting and a press-and-hold zoom
//! sub-grid. The host supplies text measurement, repaint scheduling and
//! pointer events; the crate supplies layout, hit-testing and a list of
//! drawing primitives per frame.

pub mod color;
pub mod data_types;
pub mod grid;
pub mod host;
pub mod input;
pub mod legend;
pub mod render;
pub mod sizing;
pub mod theme;
pub mod tooltip;
pub mod transform;
pub mod utils;
pub mod zoom;

pub use color::Rgba;
pub use data_types::{Cell, CellIndex, CorrelationMatrix, InteractionState, RowType};
pub use grid::CorrelationGrid;
pub use host::{FontSpec, HeuristicTextMeasurer, RepaintRequester, TextMeasurer};
pub use legend::TemperatureScale;
pub use render::{DrawCommand, GridRenderer};
pub use sizing::{compute_layout, Layout};
pub use theme::GridTheme;
pub use transform::{GridTransform, Hit, Rect};
pub use zoom::Zoom;

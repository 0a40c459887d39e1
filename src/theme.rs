//! Presentation configuration for the grid, the zoom overlay, tooltips and
//! the temperature-scale legend.

use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Every visual knob the grid reads. Fields are read on each layout/paint
/// pass; nothing is cached across passes. The only cross-field contract is
/// that the highlight color must stay translucent, which is why that field
/// goes through a validating setter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridTheme {
    pub positive_color: Rgba,
    pub negative_color: Rgba,
    pub background_color: Rgba,
    pub grid_lines_color: Rgba,
    pub grid_lines_width: f32,
    pub border_color: Rgba,
    pub border_width: f32,
    pub labels_color: Rgba,
    highlight_color: Rgba,
    pub ellipse_stroke_color: Rgba,
    pub ellipse_stroke_width: f32,
    pub zoom_border_color: Rgba,
    pub zoom_border_width: f32,
    pub zoom_selection_border_color: Rgba,
    pub zoom_selection_border_width: f32,

    pub label_font_family: String,
    /// Below this cell size the grid switches to flat rectangles.
    pub compact_cell_size: f64,
    /// Cells per side of the zoom window.
    pub zoom_length: usize,
    /// Fraction of the grid height the zoom cell block occupies.
    pub zoom_area_proportion: f64,
    /// Character cap for main-grid labels.
    pub label_abbreviation_length: usize,
    /// Decimal places for displayed correlation values.
    pub decimal_places: usize,
    /// Fraction of the cell the ellipse height occupies.
    pub circle_proportion: f64,
    /// Fraction of the cell height the label glyphs occupy.
    pub label_height_proportion: f64,
    /// How flat a fully-correlated ellipse may become.
    pub squeeze_coefficient: f64,
    /// Outer margin reserved around the grid by `preferred_size`.
    pub grid_margin: f64,

    pub tooltip_font_size: f32,
    pub tooltip_text_color: Rgba,
    pub tooltip_background_color: Rgba,
    pub tooltip_border_color: Rgba,
    pub tooltip_border_width: f32,
    pub tooltip_padding: f32,

    pub show_legend: bool,
    pub legend_gradient_width: f64,
    pub legend_labels_count: usize,
    pub legend_font_size: f32,
    pub legend_labels_margin: f64,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            positive_color: Rgba::opaque(0x19, 0x65, 0xb0),
            negative_color: Rgba::opaque(0xdc, 0x32, 0x2f),
            background_color: Rgba::WHITE,
            grid_lines_color: Rgba::opaque(0xd0, 0xd0, 0xd0),
            grid_lines_width: 1.0,
            border_color: Rgba::opaque(0x40, 0x40, 0x40),
            border_width: 1.0,
            labels_color: Rgba::opaque(0x20, 0x20, 0x20),
            highlight_color: Rgba::new(0xb3, 0xe5, 0xfc, 0x80),
            ellipse_stroke_color: Rgba::opaque(0x11, 0x11, 0x11),
            ellipse_stroke_width: 1.0,
            zoom_border_color: Rgba::opaque(0x11, 0x11, 0x11),
            zoom_border_width: 2.0,
            zoom_selection_border_color: Rgba::opaque(0x11, 0x11, 0x11),
            zoom_selection_border_width: 2.0,
            label_font_family: "sans-serif".to_string(),
            compact_cell_size: 16.0,
            zoom_length: 5,
            zoom_area_proportion: 0.25,
            label_abbreviation_length: 64,
            decimal_places: 4,
            circle_proportion: 0.8,
            label_height_proportion: 0.7,
            squeeze_coefficient: 0.8,
            grid_margin: 20.0,
            tooltip_font_size: 20.0,
            tooltip_text_color: Rgba::opaque(0x20, 0x20, 0x20),
            tooltip_background_color: Rgba::WHITE,
            tooltip_border_color: Rgba::opaque(0x40, 0x40, 0x40),
            tooltip_border_width: 1.0,
            tooltip_padding: 20.0,
            show_legend: false,
            legend_gradient_width: 20.0,
            legend_labels_count: 10,
            legend_font_size: 12.0,
            legend_labels_margin: 5.0,
        }
    }
}

impl GridTheme {
    pub fn highlight_color(&self) -> Rgba {
        self.highlight_color
    }

    /// Highlight bands draw over compact-mode cells, so the color must keep
    /// a non-opaque alpha channel; fully opaque values are rejected.
    pub fn set_highlight_color(&mut self, color: Rgba) -> Result<()> {
        if color.is_opaque() {
            bail!("highlight color must be translucent, got {color}");
        }
        self.highlight_color = color;
        Ok(())
    }

    /// Loads a theme from JSON, then re-checks the invariants a hand-edited
    /// file could break.
    pub fn from_json(text: &str) -> Result<Self> {
        let theme: GridTheme = serde_json::from_str(text)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> Result<()> {
        if self.highlight_color.is_opaque() {
            bail!("highlight color must be translucent");
        }
        if self.zoom_length == 0 {
            bail!("zoom length must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.zoom_area_proportion) || self.zoom_area_proportion == 0.0 {
            bail!("zoom area proportion must be in (0, 1]");
        }
        for (name, value) in [
            ("circle proportion", self.circle_proportion),
            ("label height proportion", self.label_height_proportion),
            ("squeeze coefficient", self.squeeze_coefficient),
        ] {
            if !(0.0..=1.0).contains(&value) || value == 0.0 {
                bail!("{name} must be in (0, 1], got {value}");
            }
        }
        Ok(())
    }
}

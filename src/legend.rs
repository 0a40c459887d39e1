//! Temperature-scale legend: a vertical gradient strip from the positive
//! color through the background to the negative color, with stepped value
//! labels alongside.

use glam::DVec2;

use crate::host::{FontSpec, TextMeasurer};
use crate::render::DrawCommand;
use crate::theme::GridTheme;
use crate::transform::Rect;

pub struct TemperatureScale;

impl TemperatureScale {
    /// Width the legend needs: gradient strip plus the widest label the
    /// stepping can produce, plus margins on both sides of the labels.
    pub fn preferred_width(theme: &GridTheme, measurer: &dyn TextMeasurer) -> f64 {
        let font = FontSpec::new(theme.label_font_family.clone(), theme.legend_font_size);
        theme.legend_gradient_width
            + measurer.width(&font, "-0.0")
            + theme.legend_labels_margin * 2.0
    }

    /// Paints the legend into a box of the given height at `origin`.
    pub fn render(theme: &GridTheme, origin: DVec2, height: f64) -> Vec<DrawCommand> {
        if height <= 0.0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        out.push(DrawCommand::GradientV {
            rect: Rect::new(origin.x, origin.y, theme.legend_gradient_width, height),
            stops: vec![
                (0.0, theme.positive_color),
                (0.5, theme.background_color),
                (1.0, theme.negative_color),
            ],
        });

        let count = theme.legend_labels_count;
        if count == 0 {
            return out;
        }
        let font = FontSpec::new(theme.label_font_family.clone(), theme.legend_font_size);
        let step = 2.0 / count as f64;
        let height_step = height / count as f64;
        let label_x = origin.x + theme.legend_gradient_width + theme.legend_labels_margin;
        let mut current = 1.0;
        for i in 0..count {
            out.push(DrawCommand::Text {
                origin: DVec2::new(label_x, origin.y + i as f64 * height_step),
                text: format!("{current:.1}"),
                font: font.clone(),
                color: theme.labels_color,
                rotation: 0.0,
            });
            current -= step;
        }
        out
    }
}

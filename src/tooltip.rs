//! Tooltip text for hovered cells. The crate produces the text only; the
//! host owns the chrome, styled from the theme's tooltip block.

use crate::data_types::{CorrelationMatrix, RowType};
use crate::theme::GridTheme;
use crate::transform::Hit;
use crate::utils::format_correlation_value;

/// Descriptive text for a pointer position, or `None` outside both the cell
/// block and the label column.
pub fn tooltip_text(hit: Hit, matrix: &CorrelationMatrix, theme: &GridTheme) -> Option<String> {
    match hit {
        Hit::DataCell(index) => Some(data_cell_text(index.i, index.j, matrix, theme)),
        Hit::TitleCell(index) => Some(matrix.title(index.j).to_string()),
        Hit::Outside => None,
    }
}

/// Both row titles, then the correlation method implied by the row-type
/// pairing. Anything other than numeric×numeric and nominal×nominal falls
/// through to ANOVA.
fn data_cell_text(i: usize, j: usize, matrix: &CorrelationMatrix, theme: &GridTheme) -> String {
    let places = theme.decimal_places;
    let squared = format_correlation_value(matrix.correlation_sqr(i, j), places);
    let mut lines = vec![matrix.title(i).to_string(), matrix.title(j).to_string()];
    match (matrix.row_type(i), matrix.row_type(j)) {
        (RowType::Numeric, RowType::Numeric) => {
            lines.push(format!("Pearson's R² = {squared}"));
            lines.push(format!(
                "Pearson's R = {}",
                format_correlation_value(matrix.correlation(i, j), places)
            ));
        }
        (RowType::Nominal, RowType::Nominal) => {
            lines.push(format!("Cramer's V = {squared}"));
        }
        _ => {
            lines.push(format!("ANOVA R² = {squared}"));
        }
    }
    lines.join("\n")
}

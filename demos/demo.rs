//! Headless demo: builds a sample matrix, lays it out at 800×800 and prints
//! the resulting frame summary.

use corrgrid::{CellIndex, CorrelationGrid, CorrelationMatrix, HeuristicTextMeasurer, RowType};
use glam::DVec2;
use rand::Rng;

fn main() -> eyre::Result<()> {
    let titles: Vec<String> = [
        "Duration", "Method", "Year", "Amount", "Status", "Score", "Accuracy", "Level", "Type",
        "Length", "Area", "Quality",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let row_types: Vec<RowType> = titles
        .iter()
        .enumerate()
        .map(|(i, _)| if i % 4 == 1 { RowType::Nominal } else { RowType::Numeric })
        .collect();

    let n = titles.len();
    let mut rng = rand::rng();
    let mut correlations = vec![vec![0.0; n]; n];
    let mut correlations_sqr = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let r = if i == j { 1.0 } else { rng.random_range(-1.0..1.0) };
            correlations[i][j] = r;
            correlations[j][i] = r;
            correlations_sqr[i][j] = r * r;
            correlations_sqr[j][i] = r * r;
        }
    }

    let matrix = CorrelationMatrix::new(row_types, titles, correlations, correlations_sqr)?;
    let mut grid = CorrelationGrid::new(matrix);
    let measurer = HeuristicTextMeasurer::default();

    grid.resize(DVec2::new(800.0, 800.0), &measurer);
    let layout = grid.layout();
    println!(
        "layout: {}x{} cells of {:.1}px, compact = {}",
        layout.length, layout.length, layout.cell_size, layout.compact
    );

    let frame = grid.render();
    println!("frame: {} draw commands", frame.len());

    let probe = grid.cell(CellIndex::new(1, 3));
    let center = DVec2::new(probe.x + probe.size / 2.0, probe.y + probe.size / 2.0);
    if let Some(text) = grid.tooltip_text(center) {
        println!("tooltip at (1, 3):\n{text}");
    }
    Ok(())
}

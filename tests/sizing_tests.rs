use corrgrid::{
    compute_layout, CellIndex, CorrelationGrid, CorrelationMatrix, FontSpec, GridTheme,
    HeuristicTextMeasurer, RowType, TextMeasurer,
};
use glam::DVec2;

fn sample_matrix() -> CorrelationMatrix {
    let mut titles = vec![
        "Method".to_string(),
        "Year".to_string(),
        "Amount".to_string(),
        "Status".to_string(),
        "Score".to_string(),
    ];
    titles.insert(0, format!("Duration {}", "A".repeat(100)));
    let n = titles.len();
    CorrelationMatrix::new(
        vec![RowType::Numeric; n],
        titles,
        vec![vec![0.5; n]; n],
        vec![vec![0.25; n]; n],
    )
    .unwrap()
}

fn sized_grid(width: f64, height: f64) -> CorrelationGrid {
    let mut grid = CorrelationGrid::new(sample_matrix());
    grid.resize(DVec2::new(width, height), &HeuristicTextMeasurer::default());
    grid
}

#[test]
fn preferred_width_exceeds_height_with_long_label() {
    let layout = compute_layout(
        DVec2::new(800.0, 800.0),
        &sample_matrix(),
        &GridTheme::default(),
        &HeuristicTextMeasurer::default(),
    );
    assert!(layout.width > layout.height);
}

#[test]
fn grid_is_a_square_block_plus_label_column() {
    let grid = sized_grid(800.0, 800.0);
    let layout = grid.layout();
    assert!((layout.height - layout.cell_size * 6.0).abs() < 1e-6);
    assert!((layout.cells_width() - layout.cell_size * 6.0).abs() < 1e-6);
    assert!(layout.cells_x() > 0.0, "label column must get some width");
}

#[test]
fn cells_lay_out_on_the_cell_grid() {
    let grid = sized_grid(800.0, 800.0);
    let cell_size = grid.layout().cell_size;

    let cell_0_0 = grid.cell(CellIndex::new(0, 0));
    assert_eq!(cell_0_0.y, 0.0);
    assert_eq!(cell_0_0.size, cell_size);

    let cell_1_0 = grid.cell(CellIndex::new(1, 0));
    assert!((cell_1_0.x - cell_0_0.x - cell_size).abs() < 1.0);

    let cell_1_1 = grid.cell(CellIndex::new(1, 1));
    assert!((cell_1_1.y - cell_1_0.y - cell_size).abs() < 1.0);
}

#[test]
fn compact_mode_flips_below_the_threshold() {
    let mut grid = sized_grid(800.0, 800.0);
    assert!(!grid.is_compact());
    assert!(!grid.cell(CellIndex::new(0, 0)).compact);

    grid.resize(DVec2::new(200.0, 200.0), &HeuristicTextMeasurer::default());
    assert!(grid.is_compact());
    assert!(grid.cell(CellIndex::new(0, 0)).compact);
}

#[test]
fn degenerate_space_renders_nothing() {
    let measurer = HeuristicTextMeasurer::default();
    let mut grid = CorrelationGrid::new(sample_matrix());
    grid.resize(DVec2::new(10.0, 10.0), &measurer);

    assert!(grid.layout().is_degenerate());
    assert!(grid.render().is_empty());
    assert_eq!(grid.preferred_size(DVec2::new(10.0, 10.0), &measurer), DVec2::ZERO);
}

#[test]
fn hit_test_round_trips_through_cell_centers() {
    let grid = sized_grid(800.0, 800.0);
    let transform = grid.transform();
    for i in 0..6 {
        for j in 0..6 {
            let index = CellIndex::new(i, j);
            let center = transform.cell_rect(index).center();
            assert_eq!(transform.detect_cell(center), Some(index));
        }
    }
}

#[test]
fn title_cells_resolve_to_the_diagonal_index() {
    let grid = sized_grid(800.0, 800.0);
    let transform = grid.transform();
    let layout = grid.layout();

    let position = DVec2::new(layout.cells_x() / 2.0, layout.cell_size * 3.5);
    assert_eq!(transform.detect_title_cell(position), Some(CellIndex::new(3, 3)));
    assert_eq!(transform.detect_cell(position), None);
}

#[test]
fn points_outside_the_grid_miss() {
    let grid = sized_grid(800.0, 800.0);
    let transform = grid.transform();
    let layout = grid.layout();

    let below = DVec2::new(layout.width - layout.cell_size / 2.0, layout.height + 10.0);
    assert_eq!(transform.detect_cell(below), None);
    assert_eq!(transform.detect_title_cell(below), None);

    let in_border = DVec2::new(0.5, layout.cell_size * 2.5);
    assert_eq!(transform.detect_title_cell(in_border), None);
}

#[test]
fn wide_spaces_use_the_vertical_fit_regime() {
    let titles: Vec<String> = (0..6).map(|i| format!("Row {i}")).collect();
    let matrix = CorrelationMatrix::new(
        vec![RowType::Numeric; 6],
        titles,
        vec![vec![0.5; 6]; 6],
        vec![vec![0.25; 6]; 6],
    )
    .unwrap();
    let layout = compute_layout(
        DVec2::new(4000.0, 400.0),
        &matrix,
        &GridTheme::default(),
        &HeuristicTextMeasurer::default(),
    );

    // Height binds: cells fill it exactly and the width stays well short of
    // the available span.
    assert!((layout.height - 398.0).abs() < 1e-6);
    assert!((layout.cell_size - 398.0 / 6.0).abs() < 1e-6);
    assert!(layout.width < 1000.0);
}

/// Measurer whose glyph advance depends on the font size, so the provisional
/// estimate and the derived-font re-measurement disagree.
struct VariableMeasurer {
    large_factor: f64,
    small_factor: f64,
}

impl TextMeasurer for VariableMeasurer {
    fn width(&self, font: &FontSpec, text: &str) -> f64 {
        let factor = if font.size > 50.0 { self.large_factor } else { self.small_factor };
        text.chars().count() as f64 * f64::from(font.size) * factor
    }
}

#[test]
fn correction_pass_shrinks_when_labels_would_overflow() {
    let measurer = VariableMeasurer { large_factor: 0.3, small_factor: 0.8 };
    let theme = GridTheme::default();
    let matrix = sample_matrix();
    let layout = compute_layout(DVec2::new(800.0, 800.0), &matrix, &theme, &measurer);

    // First-pass estimate would be ~36px; the re-measurement must pull it in.
    assert!(layout.cell_size < 30.0);

    // And the abbreviated label now fits the column it was given.
    let font = FontSpec::new(theme.label_font_family.clone(), layout.font_size);
    let label: String = format!("Duration {}", "A".repeat(100)).chars().take(61).collect();
    let widest = measurer.width(&font, &format!("{label}..."));
    let margin = layout.cell_size * (1.0 - theme.label_height_proportion) / 2.0;
    let label_column = layout.width - layout.cells_width();
    assert!(widest + margin * 2.0 <= label_column + 2.0);
}

#[test]
fn correction_pass_never_grows_the_cell_size() {
    let measurer = VariableMeasurer { large_factor: 0.9, small_factor: 0.3 };
    let layout = compute_layout(
        DVec2::new(800.0, 800.0),
        &sample_matrix(),
        &GridTheme::default(),
        &measurer,
    );
    // The generous small-font metrics must not re-inflate the first-pass
    // solution: (800 - borders) / (N + proportion) ≈ 15.8px.
    assert!((layout.cell_size - 798.0 / 50.538).abs() < 0.1);
}
